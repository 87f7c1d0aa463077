//! Одноразовое появление регионов страницы при прокрутке.
//!
//! Контроллер не знает про DOM: наблюдение за видимостью спрятано за
//! [`VisibilityObserver`], а хост присылает пачки [`IntersectionSample`].
//! Флаг `revealed` монотонный: false → true ровно один раз.

use std::collections::BTreeMap;

/// Идентификатор зарегистрированного региона
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Параметры срабатывания
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Доля видимой площади региона, начиная с которой он показывается
    pub threshold: f64,
    /// Отступ корневой области наблюдения в пикселях
    pub margin_px: i32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin_px: -50,
        }
    }
}

impl RevealOptions {
    /// Значение `rootMargin` для IntersectionObserver
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }
}

/// Одно наблюдение видимости региона
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub region: RegionId,
    pub ratio: f64,
    /// Регион пересекает корневую область с учётом отступа
    pub is_intersecting: bool,
}

/// Хостовый механизм наблюдения за видимостью
pub trait VisibilityObserver {
    /// То, за чем наблюдает хост (DOM-элемент в браузере)
    type Target;

    fn observe(&mut self, region: RegionId, target: Self::Target);
    fn unobserve(&mut self, region: RegionId);
    fn disconnect(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionState {
    Hidden,
    Revealed,
}

pub struct RevealController<O: VisibilityObserver> {
    observer: O,
    options: RevealOptions,
    regions: BTreeMap<RegionId, RegionState>,
    torn_down: bool,
}

impl<O: VisibilityObserver> RevealController<O> {
    pub fn new(observer: O, options: RevealOptions) -> Self {
        Self {
            observer,
            options,
            regions: BTreeMap::new(),
            torn_down: false,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Регистрирует регион. Повторная регистрация того же id ничего не делает.
    ///
    /// Возвращает `true`, если регион зарегистрирован впервые.
    pub fn register(&mut self, region: RegionId, target: O::Target) -> bool {
        if self.torn_down || self.regions.contains_key(&region) {
            return false;
        }
        self.regions.insert(region, RegionState::Hidden);
        self.observer.observe(region, target);
        log::debug!("reveal: region {} registered", region.raw());
        true
    }

    /// Регион размонтирован: снимаем наблюдение и забываем его
    pub fn unregister(&mut self, region: RegionId) {
        if self.torn_down {
            return;
        }
        if let Some(state) = self.regions.remove(&region) {
            // Показанные регионы уже сняты с наблюдения
            if state == RegionState::Hidden {
                self.observer.unobserve(region);
            }
        }
    }

    /// Обрабатывает пачку наблюдений от хоста.
    ///
    /// Возвращает регионы, показанные именно этой пачкой.
    pub fn on_intersections(&mut self, batch: &[IntersectionSample]) -> Vec<RegionId> {
        if self.torn_down {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for sample in batch {
            if !sample.is_intersecting || sample.ratio < self.options.threshold {
                continue;
            }
            let Some(state) = self.regions.get_mut(&sample.region) else {
                continue;
            };
            if *state == RegionState::Hidden {
                *state = RegionState::Revealed;
                self.observer.unobserve(sample.region);
                revealed.push(sample.region);
            }
        }

        if !revealed.is_empty() {
            log::debug!("reveal: {} region(s) revealed", revealed.len());
        }
        revealed
    }

    pub fn is_registered(&self, region: RegionId) -> bool {
        self.regions.contains_key(&region)
    }

    pub fn is_revealed(&self, region: RegionId) -> bool {
        self.regions.get(&region) == Some(&RegionState::Revealed)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Отключает наблюдение. Повторный вызов ничего не делает.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.observer.disconnect();
        self.regions.clear();
        log::debug!("reveal: observer disconnected");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeObserver {
        observed: Vec<RegionId>,
        unobserved: Vec<RegionId>,
        disconnects: usize,
    }

    impl VisibilityObserver for FakeObserver {
        type Target = ();

        fn observe(&mut self, region: RegionId, _target: ()) {
            self.observed.push(region);
        }

        fn unobserve(&mut self, region: RegionId) {
            self.unobserved.push(region);
        }

        fn disconnect(&mut self) {
            self.disconnects += 1;
        }
    }

    fn controller() -> RevealController<FakeObserver> {
        RevealController::new(FakeObserver::default(), RevealOptions::default())
    }

    fn sample(id: u64, ratio: f64, is_intersecting: bool) -> IntersectionSample {
        IntersectionSample {
            region: RegionId::new(id),
            ratio,
            is_intersecting,
        }
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut c = controller();
        assert!(c.register(RegionId::new(1), ()));
        assert!(!c.register(RegionId::new(1), ()));
        assert_eq!(c.observer().observed, vec![RegionId::new(1)]);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_reveal_requires_threshold() {
        let mut c = controller();
        c.register(RegionId::new(1), ());

        assert!(c.on_intersections(&[sample(1, 0.05, true)]).is_empty());
        assert!(c.on_intersections(&[sample(1, 0.099, true)]).is_empty());
        assert!(!c.is_revealed(RegionId::new(1)));

        assert_eq!(
            c.on_intersections(&[sample(1, 0.1, true)]),
            vec![RegionId::new(1)]
        );
        assert!(c.is_revealed(RegionId::new(1)));
    }

    #[test]
    fn test_not_intersecting_is_ignored() {
        // Отступ корня не выполнен — хост сообщает is_intersecting = false
        let mut c = controller();
        c.register(RegionId::new(1), ());
        assert!(c.on_intersections(&[sample(1, 0.5, false)]).is_empty());
        assert!(!c.is_revealed(RegionId::new(1)));
    }

    #[test]
    fn test_reveal_happens_once_and_never_reverts() {
        let mut c = controller();
        c.register(RegionId::new(1), ());

        assert_eq!(c.on_intersections(&[sample(1, 1.0, true)]).len(), 1);
        assert!(c.on_intersections(&[sample(1, 1.0, true)]).is_empty());
        assert!(c.on_intersections(&[sample(1, 0.0, false)]).is_empty());
        assert!(c.is_revealed(RegionId::new(1)));
        assert_eq!(c.observer().unobserved, vec![RegionId::new(1)]);
    }

    #[test]
    fn test_batch_with_unknown_regions() {
        let mut c = controller();
        c.register(RegionId::new(1), ());
        c.register(RegionId::new(2), ());

        let revealed = c.on_intersections(&[
            sample(2, 0.3, true),
            sample(42, 1.0, true),
            sample(1, 0.02, true),
        ]);
        assert_eq!(revealed, vec![RegionId::new(2)]);
        assert!(!c.is_registered(RegionId::new(42)));
    }

    #[test]
    fn test_unregister_unobserves_hidden_region() {
        let mut c = controller();
        c.register(RegionId::new(1), ());
        c.register(RegionId::new(2), ());
        c.on_intersections(&[sample(2, 1.0, true)]);

        c.unregister(RegionId::new(1));
        c.unregister(RegionId::new(2));
        c.unregister(RegionId::new(3));

        assert!(c.is_empty());
        assert_eq!(
            c.observer().unobserved,
            vec![RegionId::new(2), RegionId::new(1)]
        );
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut c = controller();
        c.register(RegionId::new(1), ());

        c.teardown();
        c.teardown();

        assert!(c.is_torn_down());
        assert_eq!(c.observer().disconnects, 1);
        assert!(!c.register(RegionId::new(2), ()));
        assert!(c.on_intersections(&[sample(1, 1.0, true)]).is_empty());
    }

    #[test]
    fn test_root_margin_format() {
        assert_eq!(RevealOptions::default().root_margin(), "-50px");
    }
}
