//! Configuration and dependency initialization for the indexer.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;

use es_indexer_repository::config::{DEFAULT_HOST, DEFAULT_PORT};
use es_indexer_repository::{NonSuccessPolicy, SearchEngineConfig};
use tracing::warn;

use crate::resolver::DEFAULT_WIKI_TRASH_OWNER;
use crate::IndexingError;

/// Search engine host.
pub const HOST_VAR: &str = "ELASTICSEARCH_HOST";

/// Search engine port.
pub const PORT_VAR: &str = "ELASTICSEARCH_PORT";

/// `ignore` or `surface`.
pub const NON_SUCCESS_POLICY_VAR: &str = "ELASTICSEARCH_NON_SUCCESS_POLICY";

/// Wiki owner used for trash lookups.
pub const WIKI_TRASH_OWNER_VAR: &str = "WIKI_TRASH_OWNER";

/// Settings the indexer reads once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    pub engine: SearchEngineConfig,
    pub wiki_trash_owner: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineConfig::default(),
            wiki_trash_owner: DEFAULT_WIKI_TRASH_OWNER.to_string(),
        }
    }
}

impl IndexerConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_HOST`: Search engine host (default: localhost)
    /// - `ELASTICSEARCH_PORT`: Search engine port (default: 9200)
    /// - `ELASTICSEARCH_NON_SUCCESS_POLICY`: "ignore" or "surface" (default: ignore)
    /// - `WIKI_TRASH_OWNER`: Owner of the wiki trash (default: intranet)
    ///
    /// # Returns
    ///
    /// * `Ok(IndexerConfig)` - The resolved configuration
    /// * `Err(IndexingError)` - If the port is not a valid number
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                IndexingError::config(format!("Invalid {} '{}': {}", PORT_VAR, raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let non_success_policy = match lookup(NON_SUCCESS_POLICY_VAR) {
            Some(raw) => raw.parse::<NonSuccessPolicy>().unwrap_or_else(|e| {
                warn!(error = %e, "Invalid {}, defaulting to 'ignore'", NON_SUCCESS_POLICY_VAR);
                NonSuccessPolicy::Ignore
            }),
            None => NonSuccessPolicy::default(),
        };

        let wiki_trash_owner =
            lookup(WIKI_TRASH_OWNER_VAR).unwrap_or_else(|| DEFAULT_WIKI_TRASH_OWNER.to_string());

        Ok(Self {
            engine: SearchEngineConfig::new(host, port).with_non_success_policy(non_success_policy),
            wiki_trash_owner,
        })
    }
}
