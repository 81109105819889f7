//! Document synchronizer.
//!
//! Turns platform change notifications into search index writes: route the
//! key, resolve the target id, map the content, and issue one request. Every
//! failure along the way is logged and swallowed; callers get no signal.

use std::sync::Arc;

use async_trait::async_trait;
use es_indexer_repository::{DocumentTarget, SearchIndexProvider};
use es_indexer_shared::{
    ContentBag, Document, Operation, OperationKind, SearchEntry, SearchEntryKey,
};
use tracing::{debug, error, instrument};

use crate::mapper;
use crate::resolver::IdentifierResolver;
use crate::router::Route;

/// The operations the content platform invokes on its indexer.
#[async_trait]
pub trait IndexingService: Send + Sync {
    /// A new entry was created.
    async fn add(&self, entry: &SearchEntry);

    /// An existing entry changed.
    async fn update(&self, key: &SearchEntryKey, changes: &ContentBag);

    /// An entry was removed.
    async fn delete(&self, key: &SearchEntryKey);
}

/// Synchronizes platform entries to the search index.
///
/// Holds no mutable state; concurrent calls are independent and unordered.
pub struct DocumentSynchronizer {
    provider: Arc<dyn SearchIndexProvider>,
    resolver: IdentifierResolver,
}

impl DocumentSynchronizer {
    /// Create a new synchronizer writing through `provider`.
    pub fn new(provider: Arc<dyn SearchIndexProvider>, resolver: IdentifierResolver) -> Self {
        Self { provider, resolver }
    }

    /// Apply one operation.
    ///
    /// Entries of unknown collections are skipped without any request. For
    /// everything else exactly one request is issued, even when the id or the
    /// document could not be produced.
    #[instrument(
        skip(self, operation),
        fields(
            op = %operation.kind(),
            collection = %operation.key().collection,
            entry_type = %operation.key().entry_type,
            name = %operation.key().name,
        )
    )]
    pub async fn apply(&self, operation: Operation<'_>) {
        let key = operation.key();

        let Some(route) = Route::resolve(key) else {
            debug!("No indexer for this collection, skipping");
            return;
        };

        match operation.content() {
            Some(bag) => self.upsert(operation.kind(), route, key, bag).await,
            None => self.remove(route, key).await,
        }
    }

    async fn upsert(
        &self,
        kind: OperationKind,
        route: Route,
        key: &SearchEntryKey,
        bag: &ContentBag,
    ) {
        let id = self
            .resolver
            .resolve_for_upsert(route, key, bag)
            .unwrap_or_else(|e| {
                error!(route = %route, error = %e, "Failed to resolve document id");
                String::new()
            });

        let document: Option<Document> = match mapper::map_document(route, key, bag) {
            Ok(doc) => Some(doc),
            Err(e) => {
                error!(route = %route, error = %e, "Failed to map content to a document");
                None
            }
        };

        let target = DocumentTarget::new(&key.collection, &key.entry_type, id);
        match self.provider.index_document(&target, document.as_ref()).await {
            Ok(()) => debug!(path = %target, operation = %kind, "Document synchronized"),
            Err(e) => error!(path = %target, error = %e, "Failed to index document"),
        }
    }

    async fn remove(&self, route: Route, key: &SearchEntryKey) {
        let id = match self.resolver.resolve_for_delete(route, key).await {
            Ok(id) => id,
            Err(e) => {
                error!(route = %route, error = %e, "Failed to resolve document id");
                String::new()
            }
        };

        let target = DocumentTarget::new(&key.collection, &key.entry_type, id);
        match self.provider.delete_document(&target).await {
            Ok(()) => debug!(path = %target, "Document deleted"),
            Err(e) => error!(path = %target, error = %e, "Failed to delete document"),
        }
    }
}

#[async_trait]
impl IndexingService for DocumentSynchronizer {
    async fn add(&self, entry: &SearchEntry) {
        self.apply(Operation::Add(entry)).await
    }

    async fn update(&self, key: &SearchEntryKey, changes: &ContentBag) {
        self.apply(Operation::Update { key, changes }).await
    }

    async fn delete(&self, key: &SearchEntryKey) {
        self.apply(Operation::Delete(key)).await
    }
}
