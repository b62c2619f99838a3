use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique ID that refers to one link in a catalog. Stable for the lifetime
/// of the record.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub u32);

/// One entry of the catalog.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub description: String,
    /// The label of the category this link belongs to. Must be one of the
    /// catalog's declared categories.
    pub category: String,
    /// Free-form tags, in authored order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
