//! Error types for the FinAura API client.

use thiserror::Error;

/// API client errors.
///
/// Only two user-visible outcomes exist: the dashboard shows a persistent
/// "backend offline" state, and a failed chat send appends a fallback bot
/// message. Every variant here maps to one of those - there is no retry
/// and no finer user-facing taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect failure, timeout, DNS, ...)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    Protocol { status: u16, body: String },

    /// The response body did not match the expected payload shape
    #[error("Invalid response payload: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Classify a transport-level reqwest error.
    ///
    /// Body-decode failures are reported separately so logs can tell a
    /// dead backend from a misbehaving one; the UI treats both as offline.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }

    /// Check if this error is a network-level failure (request never completed).
    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Get a user-friendly error message for the offline banner.
    pub fn friendly_message(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => {
                "Backend timed out. Check your connection.".to_string()
            }
            ApiError::Network(_) => "Could not reach the FinAura backend.".to_string(),
            ApiError::Protocol { status, .. } => {
                format!("Backend error (HTTP {}).", status)
            }
            ApiError::Decode(_) => "Backend sent an unreadable response.".to_string(),
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
