//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations and mock providers in tests.

use async_trait::async_trait;
use es_indexer_shared::Document;

use crate::errors::SearchIndexError;
use crate::types::DocumentTarget;

/// Abstracts the underlying search index implementation.
///
/// Implementations issue exactly one request per call and never retry. All
/// methods return `Result<T, SearchIndexError>`; whether a non-2xx response
/// counts as an error is up to the implementation's configuration.
///
/// # Note on Document Creation
///
/// There is no separate `create_document` function: the engine upserts by id,
/// so `index_document` serves both new and changed entries.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Write a document at `target`, replacing any previous version.
    ///
    /// A `None` document is sent as a JSON `null` body.
    ///
    /// # Arguments
    ///
    /// * `target` - Collection, type and id of the document
    /// * `document` - The mapped document, if mapping succeeded
    async fn index_document(
        &self,
        target: &DocumentTarget,
        document: Option<&Document>,
    ) -> Result<(), SearchIndexError>;

    /// Delete the document at `target`.
    async fn delete_document(&self, target: &DocumentTarget) -> Result<(), SearchIndexError>;
}
