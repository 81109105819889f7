//! # Content Indexer
//!
//! Keeps a search engine in sync with a content platform: every add, update
//! and delete notification for a platform entry becomes one document write or
//! deletion against the engine's per-document HTTP API.
//!
//! ## Architecture
//!
//! Each notification flows through the same steps:
//!
//! 1. **Router**: Resolves the entry key to a content family, or skips it
//! 2. **Resolver**: Determines the document id, consulting the platform for deletions
//! 3. **Mapper**: Turns the platform object into a search document
//! 4. **Synchronizer**: Issues the request through a `SearchIndexProvider`
//!
//! Failures are logged and never reach the caller.
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`router`]: Collection/type routing
//! - [`resolver`]: Document id resolution and platform lookups
//! - [`mapper`]: Content to document mapping
//! - [`synchronizer`]: The indexing service entry points
//! - [`errors`]: Error types for the indexer

pub mod config;
pub mod errors;
pub mod mapper;
pub mod resolver;
pub mod router;
pub mod synchronizer;

pub use config::{Dependencies, IndexerConfig};
pub use errors::{MappingError, ResolutionError};
pub use resolver::{IdentifierResolver, QuestionDirectory, WikiTrash};
pub use router::Route;
pub use synchronizer::{DocumentSynchronizer, IndexingService};

use thiserror::Error;

/// Errors that can occur during indexer initialization.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
