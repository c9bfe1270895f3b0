//! reqwest-backed VMS client

use super::VmsClient;
use crate::config::VmsConfig;
use crate::error::{Result, SyncError};
use crate::types::{ResourceKind, StatusPatch, AUTH_TOKEN_HEADER, JSON_API_MEDIA_TYPE};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};

/// VMS client over HTTP
///
/// The host and API key are read from the config on every request, so a
/// missing `VMS_HOST` fails each call before anything goes on the wire.
pub struct HttpVmsClient {
    client: reqwest::Client,
    config: VmsConfig,
}

impl HttpVmsClient {
    /// Build a client, applying the configured timeout if any
    pub fn new(config: VmsConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout()? {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SyncError::Transport {
            operation: "Building HTTP client".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, config })
    }

    /// Use an existing reqwest client (shared connection pool)
    pub fn with_client(client: reqwest::Client, config: VmsConfig) -> Self {
        Self { client, config }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let api_key = self.config.api_key()?;
        let token = HeaderValue::from_str(api_key)
            .map_err(|e| SyncError::Config(format!("API_KEY is not a valid header value: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token);
        Ok(headers)
    }

    fn lookup_url(&self, kind: ResourceKind, reference: &str) -> Result<String> {
        Ok(format!(
            "{}{}?filter[{}]={}",
            self.config.host()?,
            kind.collection_path(),
            kind.filter_attribute(),
            reference
        ))
    }

    fn resource_url(&self, kind: ResourceKind, id: &str) -> Result<String> {
        Ok(format!(
            "{}{}/{}",
            self.config.host()?,
            kind.collection_path(),
            id
        ))
    }

    /// Send a request and return the body of a 200 response
    async fn execute(operation: String, request: RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                SyncError::Config(format!("{}: {}", operation, e))
            } else {
                SyncError::Transport {
                    operation: operation.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SyncError::Transport {
            operation: operation.clone(),
            reason: format!("reading response body: {}", e),
        })?;

        if status != StatusCode::OK {
            tracing::warn!(
                operation = %operation,
                status = status.as_u16(),
                "VMS responded with non-200 status"
            );
            return Err(SyncError::Upstream {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl VmsClient for HttpVmsClient {
    async fn lookup(&self, kind: ResourceKind, reference: &str) -> Result<String> {
        let url = self.lookup_url(kind, reference)?;
        let headers = self.headers()?;

        tracing::debug!(kind = %kind, url = %url, "Looking up VMS resources");

        Self::execute(kind.lookup_operation(), self.client.get(&url).headers(headers)).await
    }

    async fn update_status(
        &self,
        kind: ResourceKind,
        id: &str,
        status: &str,
    ) -> Result<serde_json::Value> {
        let url = self.resource_url(kind, id)?;
        let headers = self.headers()?;
        let payload = serde_json::to_vec(&StatusPatch::new(kind, id, status))?;

        tracing::debug!(kind = %kind, id = %id, url = %url, "Patching VMS resource status");

        let body = Self::execute(
            kind.update_operation(),
            self.client.patch(&url).headers(headers).body(payload),
        )
        .await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        "http"
    }
}
