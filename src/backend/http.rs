// ABOUTME: HTTP save backend - PUTs the payload as JSON to a configured endpoint.
// ABOUTME: Implements SaveBackend for any Serialize payload / Deserialize result.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::SaveBackend;
use crate::error::BackendError;

/// Save backend that persists payloads over HTTP.
///
/// Each save PUTs the payload as a JSON body to the configured endpoint and
/// deserializes the canonical stored record from the response body.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend targeting the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a backend with a preconfigured HTTP client.
    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// The endpoint this backend writes to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl<P, R> SaveBackend<P, R> for HttpBackend
where
    P: Serialize + Send + Sync,
    R: DeserializeOwned + Send,
{
    async fn save(&self, payload: &P) -> Result<R, anyhow::Error> {
        let response = self
            .http
            .put(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(BackendError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let result = response.json().await.map_err(BackendError::Http)?;
        Ok(result)
    }
}
