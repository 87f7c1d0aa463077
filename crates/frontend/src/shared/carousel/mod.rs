pub mod auto_advance;
pub mod controller;

pub use auto_advance::{AutoAdvance, RecurringTimer};
pub use controller::{CarouselController, CarouselError};

use leptos::prelude::*;

/// Реактивная обёртка над [`CarouselController`] для компонентов.
#[derive(Clone, Copy)]
pub struct CarouselHandle {
    state: RwSignal<CarouselController>,
}

impl CarouselHandle {
    pub fn current(&self) -> usize {
        self.state.with(|c| c.current())
    }

    pub fn advance(&self) {
        self.state.try_update(|c| c.advance());
    }

    /// Выбор пользователя; ошибка диапазона логируется и не меняет слайд
    pub fn select(&self, index: usize) {
        let mut next = self.state.get_untracked();
        match next.select(index) {
            Ok(_) => {
                self.state.try_set(next);
            }
            Err(err) => log::warn!("carousel: {}", err),
        }
    }
}

/// Создаёт карусель из `len` слайдов и, если включено, запускает автопрокрутку.
///
/// Таймер останавливается вместе с владельцем компонента.
pub fn use_carousel(
    len: usize,
    interval_ms: u32,
    autoplay: bool,
) -> Result<CarouselHandle, CarouselError> {
    use_carousel_with(len, autoplay, move |on_tick| {
        AutoAdvance::start(interval_ms, on_tick)
    })
}

fn use_carousel_with<T, F>(
    len: usize,
    autoplay: bool,
    start: F,
) -> Result<CarouselHandle, CarouselError>
where
    T: RecurringTimer + 'static,
    F: FnOnce(Box<dyn FnMut()>) -> AutoAdvance<T>,
{
    let handle = CarouselHandle {
        state: RwSignal::new(CarouselController::new(len)?),
    };

    if autoplay && len > 1 {
        let timer = StoredValue::new_local(start(Box::new(move || handle.advance())));
        on_cleanup(move || {
            timer.try_update_value(|t| t.stop());
        });
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type TickSlot = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    struct ManualTimer(Rc<Cell<usize>>);

    impl RecurringTimer for ManualTimer {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn fire(tick: &TickSlot) {
        if let Some(on_tick) = tick.borrow_mut().as_mut() {
            on_tick();
        }
    }

    #[test]
    fn test_out_of_range_select_keeps_slide() {
        let owner = Owner::new();
        owner.with(|| {
            let carousel = use_carousel(3, 5000, false).unwrap();
            carousel.advance();
            carousel.select(3);
            assert_eq!(carousel.current(), 1);
        });
    }

    #[test]
    fn test_advance_continues_from_selected_slide() {
        let owner = Owner::new();
        owner.with(|| {
            let carousel = use_carousel(3, 5000, false).unwrap();
            carousel.select(2);
            carousel.advance();
            assert_eq!(carousel.current(), 0);
        });
    }

    #[test]
    fn test_timer_ticks_and_cleanup_cancels_once() {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let cancels = Rc::new(Cell::new(0));
        let owner = Owner::new();

        let carousel = owner.with(|| {
            let slot = tick.clone();
            let counter = cancels.clone();
            use_carousel_with(3, true, move |on_tick| {
                *slot.borrow_mut() = Some(on_tick);
                AutoAdvance::with_timer(ManualTimer(counter))
            })
            .unwrap()
        });

        fire(&tick);
        fire(&tick);
        assert_eq!(carousel.current(), 2);

        // Ручной выбор не сдвигает расписание: следующий тик идёт от выбранного слайда
        carousel.select(0);
        fire(&tick);
        assert_eq!(carousel.current(), 1);

        owner.cleanup();
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_single_slide_starts_no_timer() {
        let started = Rc::new(Cell::new(false));
        let owner = Owner::new();
        owner.with(|| {
            let flag = started.clone();
            use_carousel_with(1, true, move |_on_tick| {
                flag.set(true);
                AutoAdvance::with_timer(ManualTimer(Rc::new(Cell::new(0))))
            })
            .unwrap();
        });
        assert!(!started.get());
    }
}
