use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::CatalogError;

/// Label of the "all" entry of the category selector when the vocabulary does
/// not name one.
pub const DEFAULT_ALL_LABEL: &str = "Все";

fn default_all_label() -> String {
    DEFAULT_ALL_LABEL.to_owned()
}

/// The declared category labels of a catalog, as supplied by the host. This is
/// unvalidated input; it becomes a `CategoriesTable` when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVocabulary {
    /// Label shown for the synthetic "all" entry. It is never stored on a
    /// record and may not be declared as a category.
    #[serde(default = "default_all_label")]
    pub all_label: String,
    /// The declared categories, in the order the selector lists them.
    pub labels: Vec<String>,
}

impl CategoryVocabulary {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { all_label: default_all_label(), labels: labels.into_iter().map(Into::into).collect() }
    }

    pub fn with_all_label(mut self, all_label: impl Into<String>) -> Self {
        self.all_label = all_label.into();
        self
    }
}

/// The validated, closed set of categories of a catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoriesTable {
    all_label: String,
    categories: Vec<CategoryData>,
    by_label: HashMap<String, CategoryId>,
}

/// Refers to one declared category of a catalog. Only obtainable from that
/// catalog's `CategoriesTable`; using an id with a different catalog is a
/// contract violation and matches arbitrarily.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct CategoryId(usize);

#[derive(Debug, PartialEq, Eq)]
pub struct CategoryData {
    /// The label records use to name this category, e.g. "Дизайн".
    pub label: String,
}

/// The category half of the selection state.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum CategoryFilter {
    /// The "all" sentinel: every record passes.
    #[default]
    All,
    /// Only records of exactly this category pass.
    Only(CategoryId),
}

impl CategoriesTable {
    pub fn from_vocabulary(vocabulary: CategoryVocabulary) -> Result<Self, CatalogError> {
        let CategoryVocabulary { all_label, labels } = vocabulary;

        let mut categories = Vec::with_capacity(labels.len());
        let mut by_label = HashMap::with_capacity(labels.len());
        for label in labels {
            if label == all_label {
                return Err(CatalogError::SentinelCategory(label));
            }
            let id = CategoryId(categories.len());
            if by_label.insert(label.clone(), id).is_some() {
                return Err(CatalogError::DuplicateCategory(label));
            }
            categories.push(CategoryData { label });
        }

        Ok(Self { all_label, categories, by_label })
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Looks up a declared category by its exact label. The "all" label is not
    /// a category and yields `None`.
    pub fn lookup(&self, label: &str) -> Option<CategoryId> {
        self.by_label.get(label).copied()
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryData> {
        self.categories.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &CategoryData)> {
        self.categories.iter().enumerate().map(|(index, data)| (CategoryId(index), data))
    }

    /// Resolves a selector label to a filter value: the "all" label becomes
    /// `CategoryFilter::All`, a declared label becomes `CategoryFilter::Only`,
    /// anything else is `None`.
    pub fn filter_for(&self, label: &str) -> Option<CategoryFilter> {
        if label == self.all_label {
            Some(CategoryFilter::All)
        } else {
            self.lookup(label).map(CategoryFilter::Only)
        }
    }

    /// Every value the category selector may emit, "all" first and then the
    /// declared categories in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, CategoryFilter)> {
        std::iter::once((self.all_label.as_str(), CategoryFilter::All)).chain(
            self.iter().map(|(id, data)| (data.label.as_str(), CategoryFilter::Only(id))),
        )
    }
}

impl CategoryFilter {
    pub fn admits(self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}
