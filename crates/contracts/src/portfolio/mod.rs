//! Статический контент страницы портфолио.
//!
//! Все записи задаются на этапе сборки и не меняются во время работы.

pub mod content;

use crate::enums::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub use content::{about_image, portfolio_content};

/// Слайд карусели в hero-секции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub category: Category,
}

/// Работа в галерее
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub year: u16,
}

/// Карточка услуги
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Запись в блоке "Опыт работы"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub summary: String,
}

/// Навык с уровнем владения в процентах (0..=100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub icon: String,
    pub title: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub href: String,
}

/// Пункт навигации: якорь секции и подпись
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

/// Весь контент страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub nav: Vec<NavSection>,
    pub slides: Vec<Slide>,
    pub items: Vec<PortfolioItem>,
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub contacts: Vec<ContactInfo>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("carousel needs at least one slide")]
    NoSlides,
    #[error("duplicate portfolio item id {0}")]
    DuplicateItemId(u32),
    #[error("skill '{name}' has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

impl PortfolioContent {
    /// Проверка инвариантов контента: есть хотя бы один слайд,
    /// id работ уникальны, уровни навыков не больше 100.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateItemId(item.id));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        Ok(())
    }

    /// Категории, у которых есть хотя бы одна работа, в порядке первого появления
    pub fn used_categories(&self) -> Vec<Category> {
        let mut result: Vec<Category> = Vec::new();
        for item in &self.items {
            if !result.contains(&item.category) {
                result.push(item.category);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: Category) -> PortfolioItem {
        PortfolioItem {
            id,
            title: format!("Работа {}", id),
            category,
            image: "img/placeholder.jpg".to_string(),
            description: String::new(),
            year: 2024,
        }
    }

    #[test]
    fn test_builtin_content_is_valid() {
        assert_eq!(portfolio_content().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut content = portfolio_content().clone();
        content.items = vec![item(1, Category::Logo), item(1, Category::Branding)];
        assert_eq!(content.validate(), Err(ContentError::DuplicateItemId(1)));
    }

    #[test]
    fn test_empty_slides_rejected() {
        let mut content = portfolio_content().clone();
        content.slides.clear();
        assert_eq!(content.validate(), Err(ContentError::NoSlides));
    }

    #[test]
    fn test_skill_level_checked() {
        let mut content = portfolio_content().clone();
        content.skills = vec![Skill {
            name: "Figma".to_string(),
            level: 120,
        }];
        assert_eq!(
            content.validate(),
            Err(ContentError::SkillLevelOutOfRange {
                name: "Figma".to_string(),
                level: 120
            })
        );
    }

    #[test]
    fn test_used_categories_in_first_seen_order() {
        let mut content = portfolio_content().clone();
        content.items = vec![
            item(1, Category::Logo),
            item(2, Category::Branding),
            item(3, Category::Logo),
        ];
        assert_eq!(
            content.used_categories(),
            vec![Category::Logo, Category::Branding]
        );
    }
}
