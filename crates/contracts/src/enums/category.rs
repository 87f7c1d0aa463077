use serde::{Deserialize, Serialize};
use std::fmt;

/// Категории работ в портфолио
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Branding,
    Logo,
    Brandbook,
    Packaging,
    Photography,
    Illustration,
}

impl Category {
    /// Код категории (используется в URL и data-атрибутах)
    pub fn code(&self) -> &'static str {
        match self {
            Category::Branding => "branding",
            Category::Logo => "logo",
            Category::Brandbook => "brandbook",
            Category::Packaging => "packaging",
            Category::Photography => "photography",
            Category::Illustration => "illustration",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Branding => "Брендинг",
            Category::Logo => "Логотип",
            Category::Brandbook => "Брендбук",
            Category::Packaging => "Упаковка",
            Category::Photography => "Фотография",
            Category::Illustration => "Иллюстрация",
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Branding,
            Category::Logo,
            Category::Brandbook,
            Category::Packaging,
            Category::Photography,
            Category::Illustration,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "branding" => Some(Category::Branding),
            "logo" => Some(Category::Logo),
            "brandbook" => Some(Category::Brandbook),
            "packaging" => Some(Category::Packaging),
            "photography" => Some(Category::Photography),
            "illustration" => Some(Category::Illustration),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Выбор в фильтре галереи: все работы или одна категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    pub const ALL_CODE: &'static str = "all";

    pub fn code(&self) -> &'static str {
        match self {
            CategorySelection::All => Self::ALL_CODE,
            CategorySelection::Only(category) => category.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategorySelection::All => "Все",
            CategorySelection::Only(category) => category.display_name(),
        }
    }

    /// `"all"` или код категории; всё остальное — `None`
    pub fn from_code(code: &str) -> Option<Self> {
        if code == Self::ALL_CODE {
            Some(CategorySelection::All)
        } else {
            Category::from_code(code).map(CategorySelection::Only)
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Category::Photography).unwrap();
        assert_eq!(json, "\"photography\"");
    }

    #[test]
    fn test_selection_from_code() {
        assert_eq!(CategorySelection::from_code("all"), Some(CategorySelection::All));
        assert_eq!(
            CategorySelection::from_code("logo"),
            Some(CategorySelection::Only(Category::Logo))
        );
        assert_eq!(CategorySelection::from_code("Logo"), None);
    }

    #[test]
    fn test_selection_matches() {
        assert!(CategorySelection::All.matches(Category::Packaging));
        assert!(CategorySelection::Only(Category::Logo).matches(Category::Logo));
        assert!(!CategorySelection::Only(Category::Logo).matches(Category::Branding));
    }
}
