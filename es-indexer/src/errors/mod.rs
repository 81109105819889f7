//! Error types for the content indexer.
//!
//! None of these reach the caller of an indexing operation; the synchronizer
//! logs them and carries on with a degraded document or id.

use thiserror::Error;

/// Errors that occur while turning a content bag into a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The bag has nothing under the expected key.
    #[error("No content under key '{key}'")]
    MissingContent { key: String },

    /// The bag holds a different kind of object under the expected key.
    #[error("Expected {expected} under key '{key}', found {found}")]
    UnexpectedContent {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The collection has no document shape for this entry type.
    #[error("No document shape for {collection}/{entry_type}")]
    UnsupportedType {
        collection: String,
        entry_type: String,
    },
}

impl MappingError {
    /// Create a missing content error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingContent { key: key.into() }
    }

    /// Create an unexpected content error.
    pub fn unexpected(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedContent {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an unsupported type error.
    pub fn unsupported(collection: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self::UnsupportedType {
            collection: collection.into(),
            entry_type: entry_type.into(),
        }
    }
}

/// Errors that occur while resolving the id of the target document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The wiki page carries no repository node identifier.
    #[error("Wiki page {page} has no node uuid")]
    PageUuidUnavailable { page: String },

    /// The deleted wiki page could not be found in the trash.
    #[error("Wiki page {page} not found in the trash of {wiki_type}/{wiki_owner}")]
    PageNotInTrash {
        wiki_type: String,
        wiki_owner: String,
        page: String,
    },

    /// No question is linked to the given activity.
    #[error("No question matches activity id {activity_id}")]
    NoMatchingQuestion { activity_id: String },

    /// A platform lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// The content needed to derive the id could not be read.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}

impl ResolutionError {
    /// Create a lookup error.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }
}
