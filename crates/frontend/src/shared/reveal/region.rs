use super::controller::{IntersectionSample, RegionId, RevealController, RevealOptions};
use super::dom_observer::DomVisibilityObserver;
use leptos::html;
use leptos::prelude::*;
use std::collections::HashSet;
use web_sys::Element;

/// Контекст появления регионов, живёт столько же, сколько страница.
#[derive(Clone, Copy)]
pub struct RevealService {
    controller: StoredValue<Option<RevealController<DomVisibilityObserver>>, LocalStorage>,
    revealed: RwSignal<HashSet<RegionId>>,
    /// Наблюдатель недоступен: все регионы показываются сразу
    fallback: RwSignal<bool>,
    next_id: StoredValue<u64>,
}

impl RevealService {
    pub fn new(options: RevealOptions) -> Self {
        let controller = StoredValue::new_local(None::<RevealController<DomVisibilityObserver>>);
        let revealed = RwSignal::new(HashSet::new());
        let fallback = RwSignal::new(false);

        let on_batch = move |batch: Vec<IntersectionSample>| {
            let newly = controller
                .try_update_value(|slot| slot.as_mut().map(|c| c.on_intersections(&batch)))
                .flatten()
                .unwrap_or_default();
            if !newly.is_empty() {
                revealed.try_update(|set| set.extend(newly));
            }
        };

        match DomVisibilityObserver::new(&options, on_batch) {
            Ok(observer) => controller.set_value(Some(RevealController::new(observer, options))),
            Err(err) => {
                log::error!("reveal: {}; regions are shown without animation", err);
                fallback.set(true);
            }
        }

        Self {
            controller,
            revealed,
            fallback,
            next_id: StoredValue::new(0),
        }
    }

    fn allocate(&self) -> RegionId {
        let raw = self
            .next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        RegionId::new(raw)
    }

    pub fn register(&self, region: RegionId, element: Element) {
        self.controller.try_update_value(|slot| {
            if let Some(controller) = slot.as_mut() {
                controller.register(region, element);
            }
        });
    }

    pub fn unregister(&self, region: RegionId) {
        self.controller.try_update_value(|slot| {
            if let Some(controller) = slot.as_mut() {
                controller.unregister(region);
            }
        });
        self.revealed.try_update(|set| set.remove(&region));
    }

    /// Реактивно: подписывает вызывающего на изменения
    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.fallback.get() || self.revealed.with(|set| set.contains(&region))
    }

    pub fn teardown(&self) {
        self.controller.try_update_value(|slot| {
            if let Some(controller) = slot.as_mut() {
                controller.teardown();
            }
        });
    }
}

/// Создаёт сервис, кладёт его в контекст и отключает наблюдение при размонтировании
pub fn provide_reveal_service(options: RevealOptions) -> RevealService {
    let service = RevealService::new(options);
    provide_context(service);
    on_cleanup(move || service.teardown());
    service
}

pub fn use_reveal() -> RevealService {
    use_context::<RevealService>().expect("RevealService context not found")
}

/// Обёртка, которая плавно появляется при первом попадании во вьюпорт.
#[component]
pub fn RevealRegion(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let service = use_reveal();
    let region = service.allocate();
    let node_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let Some(div) = node_ref.get() {
            service.register(region, div.into());
        }
    });

    on_cleanup(move || service.unregister(region));

    let region_class = move || {
        let mut classes = format!("reveal {}", class.get().unwrap_or_default());
        if service.is_revealed(region) {
            classes.push_str(" animate-fade-in");
        }
        classes
    };

    view! {
        <div node_ref=node_ref class=region_class>
            {children()}
        </div>
    }
}
