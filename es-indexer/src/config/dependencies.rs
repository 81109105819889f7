//! Dependency initialization and wiring for the indexer.

use std::sync::Arc;

use es_indexer_repository::{OpenSearchProvider, SearchIndexProvider};
use tracing::info;

use super::IndexerConfig;
use crate::resolver::{IdentifierResolver, QuestionDirectory, WikiTrash};
use crate::synchronizer::DocumentSynchronizer;
use crate::IndexingError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured synchronizer, ready to receive notifications.
    pub synchronizer: DocumentSynchronizer,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// The platform lookups are supplied by the host, which owns the content
    /// repository. See [`IndexerConfig::from_env`] for the variables read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the configuration is invalid or the provider cannot be built
    pub fn from_env(
        wiki_trash: Arc<dyn WikiTrash>,
        questions: Arc<dyn QuestionDirectory>,
    ) -> Result<Self, IndexingError> {
        let config = IndexerConfig::from_env()?;
        Self::from_config(config, wiki_trash, questions)
    }

    /// Initialize all dependencies from an explicit configuration.
    pub fn from_config(
        config: IndexerConfig,
        wiki_trash: Arc<dyn WikiTrash>,
        questions: Arc<dyn QuestionDirectory>,
    ) -> Result<Self, IndexingError> {
        info!(
            host = %config.engine.host,
            port = config.engine.port,
            non_success_policy = %config.engine.non_success_policy,
            wiki_trash_owner = %config.wiki_trash_owner,
            "Initializing dependencies"
        );

        let provider = OpenSearchProvider::new(config.engine).map_err(|e| {
            IndexingError::config(format!("Failed to create OpenSearch provider: {}", e))
        })?;
        let provider: Arc<dyn SearchIndexProvider> = Arc::new(provider);

        let resolver =
            IdentifierResolver::with_trash_owner(wiki_trash, questions, config.wiki_trash_owner);

        let synchronizer = DocumentSynchronizer::new(provider, resolver);

        Ok(Self { synchronizer })
    }
}
