//! Реализация [`VisibilityObserver`] поверх браузерного `IntersectionObserver`.

use super::controller::{IntersectionSample, RegionId, RevealOptions, VisibilityObserver};
use std::collections::HashMap;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Атрибут, по которому запись наблюдателя сопоставляется с регионом
const REGION_ATTR: &str = "data-reveal-id";

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("IntersectionObserver is unavailable: {0}")]
    ObserverUnavailable(String),
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct DomVisibilityObserver {
    inner: IntersectionObserver,
    targets: HashMap<RegionId, Element>,
    // Должен жить столько же, сколько наблюдатель
    _callback: IntersectionCallback,
}

impl DomVisibilityObserver {
    /// Создаёт наблюдатель; `on_batch` получает только записи зарегистрированных элементов
    pub fn new(
        options: &RevealOptions,
        on_batch: impl Fn(Vec<IntersectionSample>) + 'static,
    ) -> Result<Self, RevealError> {
        let callback: IntersectionCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| to_sample(&entry))
                    .collect();
                if !batch.is_empty() {
                    on_batch(batch);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let inner =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| RevealError::ObserverUnavailable(format!("{:?}", err)))?;

        Ok(Self {
            inner,
            targets: HashMap::new(),
            _callback: callback,
        })
    }
}

fn to_sample(entry: &IntersectionObserverEntry) -> Option<IntersectionSample> {
    let raw = entry
        .target()
        .get_attribute(REGION_ATTR)?
        .parse::<u64>()
        .ok()?;
    Some(IntersectionSample {
        region: RegionId::new(raw),
        ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
    })
}

impl VisibilityObserver for DomVisibilityObserver {
    type Target = Element;

    fn observe(&mut self, region: RegionId, target: Element) {
        if let Err(err) = target.set_attribute(REGION_ATTR, &region.raw().to_string()) {
            log::warn!("reveal: cannot tag region {}: {:?}", region.raw(), err);
            return;
        }
        self.inner.observe(&target);
        self.targets.insert(region, target);
    }

    fn unobserve(&mut self, region: RegionId) {
        if let Some(target) = self.targets.remove(&region) {
            self.inner.unobserve(&target);
        }
    }

    fn disconnect(&mut self) {
        self.inner.disconnect();
        self.targets.clear();
    }
}
