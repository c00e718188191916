//! Error types for FinAura operations.
//!
//! [`FinauraError`] covers the client-side failure modes: configuration,
//! filesystem, and terminal setup. Errors are designed for visibility -
//! no silent failures, clear actionable messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`FinauraError`].
pub type Result<T> = std::result::Result<T, FinauraError>;

/// Error type for FinAura client operations.
#[derive(Debug, Error)]
pub enum FinauraError {
    /// Configuration file is invalid YAML
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    /// Generic I/O error with context
    #[error("I/O error {operation}: {path}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal initialization failed
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    /// Internal error (bug in FinAura)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FinauraError {
    /// Create an I/O error
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigInvalid { .. } | Self::ConfigValidation { .. }
        )
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => {
                Some("Check YAML syntax in ~/.finaura/config.yaml")
            }
            Self::ConfigValidation { .. } => {
                Some("Set FINAURA_API_URL or pass --api-url with a valid http(s) URL")
            }
            Self::TerminalInit { .. } => Some("Try running in a different terminal"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_invalid_error() {
        let err = FinauraError::ConfigInvalid {
            path: "/home/user/.finaura/config.yaml".into(),
            message: "bad yaml".into(),
        };
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.is_config_error());
        assert!(err.guidance().is_some());
    }

    #[test]
    fn test_internal_error() {
        let err = FinauraError::internal("bug");
        assert!(err.to_string().contains("Internal error"));
        assert!(!err.is_config_error());
        assert!(err.guidance().is_none());
    }
}
