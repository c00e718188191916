//! HTTP client for the FinAura backend.
//!
//! Exactly two calls exist: `GET /dashboard` and `POST /chat`. No request
//! is ever retried, deduplicated, or cancelled - a failed dashboard fetch
//! is surfaced as a persistent offline state, and a failed chat send is
//! substituted by the caller with a fallback bot message.
//!
//! ## Example
//!
//! ```no_run
//! use finaura_api::ApiClient;
//! use finaura_core::AppConfig;
//!
//! # async fn example() -> finaura_api::Result<()> {
//! let client = ApiClient::new(&AppConfig::default())?;
//! let snapshot = client.fetch_dashboard().await?;
//! println!("safe to spend: {}", snapshot.safe_to_spend);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use finaura_core::AppConfig;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::types::{ChatReply, ChatRequest, DashboardSnapshot};

/// Client for the two FinAura backend endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the resolved application configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_base_url(&config.api_base_url, config.timeout_secs)
    }

    /// Create a client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a fresh dashboard snapshot.
    ///
    /// Callers replace any previously held snapshot wholesale; there is
    /// no partial update or merge.
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot> {
        let url = format!("{}/dashboard", self.base_url);
        debug!(%url, "fetching dashboard snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Protocol { status, body });
        }

        response.json().await.map_err(ApiError::from_transport)
    }

    /// Send one chat message to the financial therapist.
    ///
    /// On any failure the caller appends the literal fallback bot message
    /// instead of surfacing a raw error.
    pub async fn send_chat(&self, message: &str) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        debug!(%url, "sending chat message");

        let body = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Protocol { status, body });
        }

        response.json().await.map_err(ApiError::from_transport)
    }
}
