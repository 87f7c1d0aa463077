//! Параметры страницы.
//!
//! Значения по умолчанию встроены; любое из них можно переопределить
//! через query string, например `?carousel_interval_ms=3000&carousel_autoplay=false`.

use crate::shared::reveal::RevealOptions;
use serde::Deserialize;
use web_sys::window;

const MIN_CAROUSEL_INTERVAL_MS: u32 = 1000;
/// Таймер браузера принимает задержку как i32; дольше минуты слайд не держим
const MAX_CAROUSEL_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub reveal_threshold: f64,
    pub reveal_margin_px: i32,
    pub carousel_interval_ms: u32,
    pub carousel_autoplay: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_margin_px: -50,
            carousel_interval_ms: 5000,
            carousel_autoplay: true,
        }
    }
}

impl PageConfig {
    /// Разбор query string (без ведущего `?`). Ошибки разбора дают значения по умолчанию.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str::<PageConfig>(query) {
            Ok(config) => config.normalized(),
            Err(err) => {
                log::warn!("config: ignoring query overrides: {}", err);
                Self::default()
            }
        }
    }

    /// Приводит значения к допустимым диапазонам
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            defaults.reveal_threshold
        };
        Self {
            reveal_threshold,
            carousel_interval_ms: self
                .carousel_interval_ms
                .clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS),
            ..self
        }
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.reveal_threshold,
            margin_px: self.reveal_margin_px,
        }
    }
}

/// Конфигурация из адреса текущей страницы
pub fn load_page_config() -> PageConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = PageConfig::from_query(&search);
    log::debug!("config: {:?}", config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(PageConfig::from_query(""), PageConfig::default());
        assert_eq!(PageConfig::from_query("?"), PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_query("?carousel_interval_ms=3000&carousel_autoplay=false");
        assert_eq!(config.carousel_interval_ms, 3000);
        assert!(!config.carousel_autoplay);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_margin_px, -50);
    }

    #[test]
    fn test_unrelated_params_ignored() {
        assert_eq!(
            PageConfig::from_query("utm_source=mail"),
            PageConfig::default()
        );
    }

    #[test]
    fn test_invalid_value_falls_back() {
        assert_eq!(
            PageConfig::from_query("carousel_interval_ms=soon"),
            PageConfig::default()
        );
    }

    #[test]
    fn test_values_are_clamped() {
        let config = PageConfig::from_query("reveal_threshold=1.5&carousel_interval_ms=10");
        assert_eq!(config.reveal_threshold, 1.0);
        assert_eq!(config.carousel_interval_ms, MIN_CAROUSEL_INTERVAL_MS);

        let config = PageConfig::from_query("carousel_interval_ms=3000000000");
        assert_eq!(config.carousel_interval_ms, MAX_CAROUSEL_INTERVAL_MS);
        assert!(i32::try_from(config.carousel_interval_ms).is_ok());
    }

    #[test]
    fn test_reveal_options() {
        let options = PageConfig::default().reveal_options();
        assert_eq!(options, RevealOptions::default());
    }
}
