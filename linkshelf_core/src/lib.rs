//! Filtering engine for a catalog of curated links.
//!
//! A [`Catalog`] is an immutable, validated set of links plus its category
//! vocabulary. Each open view of the catalog owns a [`CatalogFilter`], which
//! holds the user's search string and category and keeps the list of visible
//! links up to date as they change.

pub mod data;
pub mod filter;
pub mod navigate;
pub mod sample;

pub use data::{
    catalog::{Catalog, CatalogError},
    category::{CategoryFilter, CategoryId, CategoryVocabulary},
    link::{LinkId, LinkRecord},
};
pub use filter::{
    view::{ViewState, VisibleRecords},
    CatalogFilter, CategoryOption, Selection,
};
pub use navigate::{Navigator, RecordSelected};
