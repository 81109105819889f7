//! OpenSearch client implementation of the search index provider.
//!
//! The provider talks to the engine's per-document HTTP endpoints, which
//! Elasticsearch and OpenSearch expose alike.

mod provider;

pub use provider::OpenSearchProvider;
