//! HTTP Chat Backend
//!
//! Implementation of `ChatBackend` over the PakRail JSON API.

use async_trait::async_trait;
use serde::Deserialize;

use rail_core::{
    backend::{ChatBackend, ChatReply, ChatRequest, ResetRequest},
    config::ClientConfig,
    error::{ChatError, Result},
};

/// Body of `GET /api/health`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Chat backend reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpChatBackend {
    /// Create a backend for a base URL such as `http://127.0.0.1:8000`
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_base))
    }

    /// Create from configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(ClientConfig::from_env())
    }

    /// Create with default localhost settings
    pub fn localhost() -> Self {
        Self::from_config(ClientConfig::default())
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ChatError::Status(status.as_u16()))
        }
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let response = self.post_json("/api/chat", request).await?;

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }

    async fn reset(&self, request: &ResetRequest) -> Result<()> {
        // the reset response body carries nothing the client uses
        self.post_json("/api/reset", request).await.map(drop)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = self.config.endpoint("/api/health");

        let response = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!("Backend health check returned {}", response.status());
                return Ok(false);
            }
            Err(e) => {
                tracing::warn!("Backend health check failed: {}", e);
                return Ok(false);
            }
        };

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        Ok(health.status == "ok")
    }
}
