//! Фильтр галереи по категории.

use contracts::enums::CategorySelection;
use contracts::portfolio::PortfolioItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilter {
    selected: CategorySelection,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> CategorySelection {
        self.selected
    }

    pub fn set_category(&mut self, selection: CategorySelection) {
        self.selected = selection;
    }

    /// Видимые работы в исходном порядке
    pub fn visible_items<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        items
            .iter()
            .filter(|item| self.selected.matches(item.category))
            .collect()
    }

    /// Число работ категории; для `All` — все работы
    pub fn count_for(items: &[PortfolioItem], selection: CategorySelection) -> usize {
        items
            .iter()
            .filter(|item| selection.matches(item.category))
            .count()
    }
}
