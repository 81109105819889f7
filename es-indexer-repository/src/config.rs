//! Configuration types for the search engine endpoint.

use std::fmt;
use std::str::FromStr;

/// Default search engine host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default search engine port.
pub const DEFAULT_PORT: u16 = 9200;

/// What to do with a response whose status is not 2xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonSuccessPolicy {
    /// Treat the request as done; the status is only logged at debug level.
    #[default]
    Ignore,
    /// Report the status and body as a `SearchIndexError`.
    Surface,
}

impl FromStr for NonSuccessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "surface" => Ok(Self::Surface),
            other => Err(format!("unknown non-success policy '{}'", other)),
        }
    }
}

impl fmt::Display for NonSuccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Surface => f.write_str("surface"),
        }
    }
}

/// Location of the search engine and the response handling policy.
///
/// Fixed for the lifetime of a provider; there is no per-call override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngineConfig {
    pub host: String,
    pub port: u16,
    pub non_success_policy: NonSuccessPolicy,
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            non_success_policy: NonSuccessPolicy::default(),
        }
    }
}

impl SearchEngineConfig {
    /// Create a config for the given endpoint with the default policy.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            non_success_policy: NonSuccessPolicy::default(),
        }
    }

    /// Set the non-success policy.
    pub fn with_non_success_policy(mut self, policy: NonSuccessPolicy) -> Self {
        self.non_success_policy = policy;
        self
    }

    /// Base URL of the document API, e.g. `http://localhost:9200`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
