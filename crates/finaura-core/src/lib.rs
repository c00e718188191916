//! # finaura-core
//!
//! Core errors, logging, and configuration for the FinAura terminal client.
//!
//! This crate provides:
//! - [`FinauraError`] - Error types for client-side operations
//! - [`logging`] - Tracing setup and log management utilities
//! - [`config`] - Backend URL and timeout resolution
//!
//! ## Example
//!
//! ```no_run
//! use finaura_core::{AppConfig, logging};
//!
//! fn main() -> finaura_core::Result<()> {
//!     let _guard = logging::init_logging(None, false)?;
//!     let config = AppConfig::load(None)?;
//!     tracing::info!(api = %config.api_base_url, "configured");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use config::AppConfig;
pub use error::{FinauraError, Result};
pub use logging::{LogGuard, init_logging};
