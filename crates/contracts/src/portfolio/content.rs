use super::{
    ContactInfo, Experience, NavSection, PortfolioContent, PortfolioItem, Service, Skill, Slide,
    SocialLink,
};
use crate::enums::Category;
use once_cell::sync::Lazy;

const HERO_IMAGE: &str = "img/1d2978ce-f599-4ca6-9059-ae60391a8c02.jpg";
const ABOUT_IMAGE: &str = "img/02160ae9-a5f9-4b95-9344-ce790e8ad0ae.jpg";
const WORK_IMAGE: &str = "img/c7efe7c3-5666-4bf2-b9db-c5973e9976c5.jpg";

static CONTENT: Lazy<PortfolioContent> = Lazy::new(build_content);

/// Контент страницы, собранный один раз
pub fn portfolio_content() -> &'static PortfolioContent {
    &CONTENT
}

/// Фото для блока "О себе"
pub fn about_image() -> &'static str {
    ABOUT_IMAGE
}

fn nav(id: &str, label: &str) -> NavSection {
    NavSection {
        id: id.into(),
        label: label.into(),
    }
}

fn slide(image: &str, title: &str, category: Category) -> Slide {
    Slide {
        image: image.into(),
        title: title.into(),
        category,
    }
}

fn work(
    id: u32,
    title: &str,
    category: Category,
    description: &str,
    year: u16,
) -> PortfolioItem {
    PortfolioItem {
        id,
        title: title.into(),
        category,
        image: WORK_IMAGE.into(),
        description: description.into(),
        year,
    }
}

fn service(icon: &str, title: &str, description: &str) -> Service {
    Service {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn build_content() -> PortfolioContent {
    PortfolioContent {
        nav: vec![
            nav("hero", "Главная"),
            nav("about", "О себе"),
            nav("portfolio", "Портфолио"),
            nav("services", "Услуги"),
            nav("resume", "Резюме"),
            nav("contact", "Контакты"),
        ],
        slides: vec![
            slide(HERO_IMAGE, "Визуальная айдентика", Category::Branding),
            slide(WORK_IMAGE, "Упаковка для эко-продуктов", Category::Packaging),
            slide(ABOUT_IMAGE, "Предметная съёмка", Category::Photography),
        ],
        items: vec![
            work(
                1,
                "Ребрендинг стартапа",
                Category::Branding,
                "Создание нового визуального стиля для технологического стартапа",
                2024,
            ),
            work(
                2,
                "Логотип ресторана",
                Category::Logo,
                "Минималистичный логотип для премиум ресторана",
                2023,
            ),
            work(
                3,
                "Корпоративная идентичность",
                Category::Brandbook,
                "Полная разработка фирменного стиля для IT-компании",
                2023,
            ),
            work(
                4,
                "Дизайн упаковки",
                Category::Packaging,
                "Креативная упаковка для эко-продуктов",
                2024,
            ),
            work(
                5,
                "Каталог мебельной фабрики",
                Category::Photography,
                "Предметная съёмка и ретушь для печатного каталога",
                2022,
            ),
            work(
                6,
                "Иллюстрации для детской книги",
                Category::Illustration,
                "Серия акварельных иллюстраций и обложка",
                2022,
            ),
        ],
        services: vec![
            service(
                "palette",
                "Брендинг",
                "Создание уникальной визуальной идентичности вашего бренда",
            ),
            service(
                "zap",
                "Логотипы",
                "Разработка запоминающихся и функциональных логотипов",
            ),
            service(
                "layout",
                "Дизайн материалов",
                "Визитки, флаеры, презентации и другие материалы",
            ),
            service(
                "package",
                "Дизайн упаковки",
                "Привлекательная упаковка, которая продает",
            ),
        ],
        experience: vec![
            Experience {
                role: "Старший графический дизайнер".into(),
                company: "Креативная студия \"Дизайн+\"".into(),
                period: "2021-2024".into(),
                summary: "Разработка брендинга для крупных клиентов, руководство командой дизайнеров"
                    .into(),
            },
            Experience {
                role: "Графический дизайнер".into(),
                company: "Рекламное агентство \"Вектор\"".into(),
                period: "2019-2021".into(),
                summary: "Создание рекламных материалов, логотипов и корпоративной айдентики".into(),
            },
        ],
        skills: vec![
            Skill { name: "Adobe Photoshop".into(), level: 95 },
            Skill { name: "Adobe Illustrator".into(), level: 90 },
            Skill { name: "Adobe InDesign".into(), level: 85 },
            Skill { name: "Figma".into(), level: 80 },
            Skill { name: "Брендинг".into(), level: 90 },
        ],
        contacts: vec![
            ContactInfo {
                icon: "mail".into(),
                title: "Email".into(),
                info: "hello@designer.com".into(),
            },
            ContactInfo {
                icon: "phone".into(),
                title: "Телефон".into(),
                info: "+7 (999) 123-45-67".into(),
            },
            ContactInfo {
                icon: "map-pin".into(),
                title: "Локация".into(),
                info: "Москва, Россия".into(),
            },
        ],
        socials: ["instagram", "linkedin", "mail", "phone"]
            .into_iter()
            .map(|icon| SocialLink {
                icon: icon.into(),
                href: "#".into(),
            })
            .collect(),
    }
}
