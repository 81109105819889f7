//! # Indexer Repository
//!
//! This crate provides the interface the content indexer uses to write to the
//! search index, the configuration of the search engine endpoint, and a
//! concrete implementation over the engine's HTTP document API.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use config::{NonSuccessPolicy, SearchEngineConfig};
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::OpenSearchProvider;
pub use types::DocumentTarget;
