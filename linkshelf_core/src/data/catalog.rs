use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::{
    category::{CategoriesTable, CategoryFilter, CategoryId, CategoryVocabulary},
    link::{LinkId, LinkRecord},
};
use crate::filter::predicate::FoldedText;

/// The immutable set of links a view filters over, together with its category
/// vocabulary. Built once and shared read-only by every view.
#[derive(Debug)]
pub struct Catalog {
    categories: CategoriesTable,
    links: Vec<LinkRecord>,
    /// Matching data derived from each link. Always the same length and order
    /// as `self.links`.
    entries: Vec<Entry>,
    by_id: HashMap<LinkId, usize>,
}

/// What the filter needs to know about a link, computed when the catalog is
/// built so that filtering never re-derives it.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) category: CategoryId,
    pub(crate) text: FoldedText,
}

/// Error type for building a catalog from a vocabulary and a set of links.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("link id {0} is used by more than one link")]
    DuplicateLinkId(LinkId),
    #[error("link {id} belongs to category {category:?}, which is not declared")]
    UndeclaredCategory { id: LinkId, category: String },
    #[error("category {0:?} is declared more than once")]
    DuplicateCategory(String),
    #[error("{0:?} is the label of the \"all\" entry and cannot be used as a category")]
    SentinelCategory(String),
}

impl Catalog {
    /// Validates the links against the vocabulary and builds the catalog. Link
    /// order is kept exactly as given; it is the order every view presents.
    pub fn new(
        vocabulary: CategoryVocabulary,
        links: Vec<LinkRecord>,
    ) -> Result<Self, CatalogError> {
        let categories = CategoriesTable::from_vocabulary(vocabulary)?;

        let mut entries = Vec::with_capacity(links.len());
        let mut by_id = HashMap::with_capacity(links.len());
        for (index, link) in links.iter().enumerate() {
            if by_id.insert(link.id, index).is_some() {
                return Err(CatalogError::DuplicateLinkId(link.id));
            }
            if link.category == categories.all_label() {
                return Err(CatalogError::SentinelCategory(link.category.clone()));
            }
            let Some(category) = categories.lookup(&link.category) else {
                return Err(CatalogError::UndeclaredCategory {
                    id: link.id,
                    category: link.category.clone(),
                });
            };
            entries.push(Entry { category, text: FoldedText::of(link) });
        }

        debug!(links = links.len(), categories = categories.len(), "built catalog");
        Ok(Self { categories, links, entries, by_id })
    }

    /// All links, in catalog order.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: LinkId) -> Option<&LinkRecord> {
        self.by_id.get(&id).map(|&index| &self.links[index])
    }

    pub fn categories(&self) -> &CategoriesTable {
        &self.categories
    }

    /// Resolves a selector label to the value `CatalogFilter::set_category`
    /// accepts. Returns `None` for labels outside the vocabulary.
    pub fn category_filter(&self, label: &str) -> Option<CategoryFilter> {
        self.categories.filter_for(label)
    }

    pub fn category_label(&self, id: CategoryId) -> Option<&str> {
        self.categories.get(id).map(|data| data.label.as_str())
    }

    /// The category of the link with the given ID.
    pub fn category_of(&self, id: LinkId) -> Option<CategoryId> {
        self.by_id.get(&id).map(|&index| self.entries[index].category)
    }

    /// Links paired with their derived matching data, in catalog order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&LinkRecord, &Entry)> {
        self.links.iter().zip(self.entries.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn link(id: u32, category: &str) -> LinkRecord {
        LinkRecord {
            id: LinkId(id),
            title: format!("Link {id}"),
            url: format!("https://example.com/{id}"),
            description: String::new(),
            category: category.to_owned(),
            tags: Vec::new(),
        }
    }

    fn vocabulary() -> CategoryVocabulary {
        CategoryVocabulary::new(["Разработка", "Инструменты"])
    }

    #[test]
    fn keeps_link_order() {
        let catalog = Catalog::new(
            vocabulary(),
            vec![link(3, "Инструменты"), link(1, "Разработка"), link(2, "Разработка")],
        )
        .unwrap();
        let ids: Vec<_> = catalog.links().iter().map(|link| link.id).collect();
        assert_eq!(ids, vec![LinkId(3), LinkId(1), LinkId(2)]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(vocabulary(), Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn get_by_id() {
        let catalog =
            Catalog::new(vocabulary(), vec![link(10, "Разработка"), link(20, "Инструменты")])
                .unwrap();
        assert_eq!(catalog.get(LinkId(20)).map(|link| link.url.as_str()), Some("https://example.com/20"));
        assert_eq!(catalog.get(LinkId(30)), None);
    }

    #[test]
    fn category_of_link() {
        let catalog = Catalog::new(vocabulary(), vec![link(1, "Инструменты")]).unwrap();
        let category = catalog.category_of(LinkId(1)).unwrap();
        assert_eq!(catalog.category_label(category), Some("Инструменты"));
        assert_eq!(catalog.category_of(LinkId(2)), None);
    }

    #[test]
    fn rejects_duplicate_id() {
        let result =
            Catalog::new(vocabulary(), vec![link(1, "Разработка"), link(1, "Инструменты")]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateLinkId(LinkId(1)));
    }

    #[test]
    fn rejects_undeclared_category() {
        let result = Catalog::new(vocabulary(), vec![link(1, "разработка")]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::UndeclaredCategory { id: LinkId(1), category: "разработка".to_owned() }
        );
    }

    #[test]
    fn rejects_link_in_all_category() {
        let result = Catalog::new(vocabulary(), vec![link(1, "Все")]);
        assert_eq!(result.unwrap_err(), CatalogError::SentinelCategory("Все".to_owned()));
    }

    #[test]
    fn errors_describe_the_problem() {
        let error = CatalogError::UndeclaredCategory { id: LinkId(4), category: "Misc".to_owned() };
        assert_eq!(error.to_string(), "link #4 belongs to category \"Misc\", which is not declared");
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
