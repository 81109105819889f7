//! Request types for search index operations.

use std::fmt;

/// Address of one document in the search engine.
///
/// Maps to the request path `/{collection}/{type}/{id}`. The `id` can be empty
/// when it could not be resolved; the request is still issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTarget {
    pub collection: String,
    pub entry_type: String,
    pub id: String,
}

impl DocumentTarget {
    pub fn new(
        collection: impl Into<String>,
        entry_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            entry_type: entry_type.into(),
            id: id.into(),
        }
    }

    /// Request path relative to the engine base URL.
    pub fn path(&self) -> String {
        format!("/{}/{}/{}", self.collection, self.entry_type, self.id)
    }
}

impl fmt::Display for DocumentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
