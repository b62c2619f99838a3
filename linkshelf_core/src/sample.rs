//! A small catalog of developer resources, useful for demos and tests.

use crate::data::{
    catalog::{Catalog, CatalogError},
    category::CategoryVocabulary,
    link::{LinkId, LinkRecord},
};

pub fn vocabulary() -> CategoryVocabulary {
    CategoryVocabulary::new(["Разработка", "Инструменты", "Сообщество", "Дизайн"])
}

pub fn links() -> Vec<LinkRecord> {
    fn link(
        id: u32,
        title: &str,
        url: &str,
        description: &str,
        category: &str,
        tags: &[&str],
    ) -> LinkRecord {
        LinkRecord {
            id: LinkId(id),
            title: title.to_owned(),
            url: url.to_owned(),
            description: description.to_owned(),
            category: category.to_owned(),
            tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
        }
    }

    vec![
        link(
            1,
            "Документация React",
            "https://react.dev",
            "Официальная документация React - современная библиотека для создания пользовательских интерфейсов",
            "Разработка",
            &["react", "frontend", "javascript"],
        ),
        link(
            2,
            "TypeScript Handbook",
            "https://www.typescriptlang.org/docs/",
            "Полное руководство по TypeScript для разработчиков",
            "Разработка",
            &["typescript", "javascript", "types"],
        ),
        link(
            3,
            "GitHub",
            "https://github.com",
            "Платформа для хостинга кода и совместной разработки проектов",
            "Инструменты",
            &["git", "vcs", "collaboration"],
        ),
        link(
            4,
            "Stack Overflow",
            "https://stackoverflow.com",
            "Крупнейшее сообщество разработчиков для поиска ответов на технические вопросы",
            "Сообщество",
            &["qa", "help", "community"],
        ),
        link(
            5,
            "MDN Web Docs",
            "https://developer.mozilla.org",
            "Документация по веб-технологиям: HTML, CSS, JavaScript и Web APIs",
            "Разработка",
            &["html", "css", "javascript", "api"],
        ),
        link(
            6,
            "Figma",
            "https://www.figma.com",
            "Collaborative design tool для создания интерфейсов и прототипов",
            "Дизайн",
            &["design", "ui", "ux", "prototyping"],
        ),
    ]
}

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vocabulary(), links())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.categories().all_label(), "Все");
    }

    #[test]
    fn every_category_is_used() {
        let catalog = catalog().unwrap();
        for (_, data) in catalog.categories().iter() {
            assert!(catalog.links().iter().any(|link| link.category == data.label), "{}", data.label);
        }
    }
}
