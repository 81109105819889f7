//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate's transport against the per-document
//! endpoints `/{collection}/{type}/{id}`.

use async_trait::async_trait;
use es_indexer_shared::Document;
use opensearch::{
    http::{
        headers::HeaderMap,
        request::JsonBody,
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        Method,
    },
    OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::{NonSuccessPolicy, SearchEngineConfig};
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::DocumentTarget;

/// OpenSearch provider implementation.
///
/// Sends one request per call: `POST` with the document as JSON body for
/// index operations, `DELETE` without body for deletions. Requests carry the
/// transport's default `application/json` content type.
///
/// # Example
///
/// ```ignore
/// use es_indexer_repository::{DocumentTarget, OpenSearchProvider, SearchEngineConfig};
/// use es_indexer_shared::Document;
///
/// let provider = OpenSearchProvider::new(SearchEngineConfig::default())?;
/// let target = DocumentTarget::new("calendar", "event", "evt-1");
/// let doc = Document::new().with("message", "Sprint review");
/// provider.index_document(&target, Some(&doc)).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    config: SearchEngineConfig,
}

impl OpenSearchProvider {
    /// Create a new provider for the configured endpoint.
    ///
    /// No connection is opened here; the first request does that.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the base URL is invalid or the transport cannot be built
    pub fn new(config: SearchEngineConfig) -> Result<Self, SearchIndexError> {
        let base_url = config.base_url();
        let parsed_url =
            Url::parse(&base_url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %base_url,
            non_success_policy = %config.non_success_policy,
            "Created OpenSearch provider"
        );

        Ok(Self { client, config })
    }

    /// The endpoint configuration this provider was built with.
    pub fn config(&self) -> &SearchEngineConfig {
        &self.config
    }

    /// Request body for an index call; a missing document becomes `null`.
    fn request_body(document: Option<&Document>) -> Value {
        document
            .map(|doc| doc.clone().into_value())
            .unwrap_or(Value::Null)
    }

    /// Apply the non-success policy to a response.
    ///
    /// Returns `Some(message)` when the status must be reported as an error.
    async fn rejected(&self, target: &DocumentTarget, response: Response) -> Option<String> {
        let status = response.status_code();
        if status.is_success() {
            debug!(path = %target, status = %status, "Search engine accepted request");
            return None;
        }

        match self.config.non_success_policy {
            NonSuccessPolicy::Ignore => {
                debug!(
                    path = %target,
                    status = %status,
                    "Search engine returned non-success status, ignoring"
                );
                None
            }
            NonSuccessPolicy::Surface => {
                let error_body = response.text().await.unwrap_or_default();
                error!(path = %target, status = %status, body = %error_body, "Request rejected");
                Some(format!("status {}: {}", status, error_body))
            }
        }
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    /// `POST /{collection}/{type}/{id}` with the document as JSON body.
    async fn index_document(
        &self,
        target: &DocumentTarget,
        document: Option<&Document>,
    ) -> Result<(), SearchIndexError> {
        let path = target.path();
        let body = JsonBody::new(Self::request_body(document));

        let response = self
            .client
            .send(
                Method::Post,
                &path,
                HeaderMap::new(),
                None::<&()>,
                Some(body),
                None,
            )
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if let Some(message) = self.rejected(target, response).await {
            return Err(SearchIndexError::index(format!(
                "Index of {} failed with {}",
                path, message
            )));
        }

        debug!(path = %target, "Document indexed");
        Ok(())
    }

    /// `DELETE /{collection}/{type}/{id}` without body.
    async fn delete_document(&self, target: &DocumentTarget) -> Result<(), SearchIndexError> {
        let path = target.path();

        let response = self
            .client
            .send(
                Method::Delete,
                &path,
                HeaderMap::new(),
                None::<&()>,
                None::<JsonBody<Value>>,
                None,
            )
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        if let Some(message) = self.rejected(target, response).await {
            return Err(SearchIndexError::delete(format!(
                "Delete of {} failed with {}",
                path, message
            )));
        }

        debug!(path = %target, "Document deleted");
        Ok(())
    }
}
