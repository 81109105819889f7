//! Search index error types.
//!
//! This module defines the unified error type for all search index operations,
//! covering transport failures as well as requests the engine rejected.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait for all document writes. Callers in
/// the indexer log these; none of them is fatal to the process.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to reach the search engine (connection refused, timeout, ...).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The engine rejected an index request.
    #[error("Index error: {0}")]
    IndexError(String),

    /// The engine rejected a delete request.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Failed to serialize a document for the request body.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
