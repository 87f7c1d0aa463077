use gloo_timers::callback::Interval;

/// Повторяющийся таймер, который можно отменить один раз
pub trait RecurringTimer {
    fn cancel(self);
}

impl RecurringTimer for Interval {
    fn cancel(self) {
        let _ = Interval::cancel(self);
    }
}

/// Таймер автопрокрутки карусели. Останавливается явно или при drop.
pub struct AutoAdvance<T: RecurringTimer = Interval> {
    timer: Option<T>,
}

impl AutoAdvance<Interval> {
    pub fn start(period_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        log::debug!("carousel: auto-advance every {} ms", period_ms);
        Self::with_timer(Interval::new(period_ms, on_tick))
    }
}

impl<T: RecurringTimer> AutoAdvance<T> {
    pub fn with_timer(timer: T) -> Self {
        Self { timer: Some(timer) }
    }

    /// Повторный вызов ничего не делает
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            log::debug!("carousel: auto-advance stopped");
        }
    }
}

impl<T: RecurringTimer> Drop for AutoAdvance<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingTimer(Rc<Cell<usize>>);

    impl RecurringTimer for CountingTimer {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let cancels = Rc::new(Cell::new(0));
        let mut timer = AutoAdvance::with_timer(CountingTimer(cancels.clone()));

        timer.stop();
        timer.stop();
        drop(timer);

        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_drop_cancels() {
        let cancels = Rc::new(Cell::new(0));
        drop(AutoAdvance::with_timer(CountingTimer(cancels.clone())));
        assert_eq!(cancels.get(), 1);
    }
}
