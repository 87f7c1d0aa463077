use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    Empty,
    #[error("slide index {index} is out of range 0..{len}")]
    OutOfRange { index: usize, len: usize },
}

/// Индекс текущего слайда в списке фиксированной длины.
///
/// Таймер и ручной выбор меняют одно и то же состояние; ручной выбор
/// не сбрасывает расписание таймера.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselController {
    len: usize,
    current: usize,
}

impl CarouselController {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Следующий слайд, после последнего — первый
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Переход к слайду `index`; индекс вне диапазона отклоняется без изменения состояния
    pub fn select(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL_MS: u64 = 5000;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(CarouselController::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_ticks_wrap_around() {
        for len in 1..=5 {
            let mut carousel = CarouselController::new(len).unwrap();
            for k in 1..=12 {
                carousel.advance();
                assert_eq!(carousel.current(), k % len);
            }
        }
    }

    #[test]
    fn test_select_in_range() {
        let mut carousel = CarouselController::new(4).unwrap();
        for j in 0..4 {
            assert_eq!(carousel.select(j), Ok(j));
            assert_eq!(carousel.current(), j);
        }
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let mut carousel = CarouselController::new(3).unwrap();
        carousel.advance();
        assert_eq!(
            carousel.select(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_manual_select_keeps_timer_schedule() {
        // Таймер срабатывает на кратных интервалу отметках, выбор в 12 500 мс его не сдвигает
        let mut carousel = CarouselController::new(3).unwrap();
        let mut at_12000 = None;

        for now in (500..=15_000u64).step_by(500) {
            if now % INTERVAL_MS == 0 {
                carousel.advance();
            }
            if now == 12_000 {
                at_12000 = Some(carousel.current());
            }
            if now == 12_500 {
                carousel.select(0).unwrap();
                assert_eq!(carousel.current(), 0);
            }
        }

        assert_eq!(at_12000, Some(2));
        assert_eq!(carousel.current(), 1);
    }
}
