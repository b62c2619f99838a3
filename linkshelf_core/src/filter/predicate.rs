//! The two per-link tests that decide visibility.
//!
//! Text matching is a case-insensitive substring search. Case is folded with
//! [`str::to_lowercase`]: the full Unicode lowercase mapping, with no locale
//! tailoring (so `'I'` always becomes `'i'`, never a dotless `'ı'`). Both the
//! query and the link text go through the same fold, so the empty query is a
//! substring of every field and matches every link.

use crate::data::{
    category::{CategoryFilter, CategoryId},
    link::LinkRecord,
};

pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Case-folded copies of the searchable fields of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FoldedText {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl FoldedText {
    pub(crate) fn of(link: &LinkRecord) -> Self {
        Self {
            title: fold_case(&link.title),
            description: fold_case(&link.description),
            tags: link.tags.iter().map(|tag| fold_case(tag)).collect(),
        }
    }

    /// `folded_query` must already have been passed through `fold_case`.
    pub(crate) fn contains(&self, folded_query: &str) -> bool {
        self.title.contains(folded_query)
            || self.description.contains(folded_query)
            || self.tags.iter().any(|tag| tag.contains(folded_query))
    }
}

/// Whether `query` occurs, ignoring case, in the title, the description or any
/// tag of `link`.
pub fn matches_text(link: &LinkRecord, query: &str) -> bool {
    FoldedText::of(link).contains(&fold_case(query))
}

/// Whether a link of `category` passes the category half of the selection.
pub fn matches_category(filter: CategoryFilter, category: CategoryId) -> bool {
    filter.admits(category)
}
