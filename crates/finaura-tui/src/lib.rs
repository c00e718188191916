//! Terminal UI for FinAura.
//!
//! This crate provides the Ratatui-based terminal interface for the
//! FinAura personal-finance dashboard.
//!
//! ## Features
//!
//! - Spending dashboard with safe-to-spend hero block and alerts
//! - Financial-therapist chat backed by the `/chat` endpoint
//! - Roommate ledger and gig listings
//!
//! ## Hotkeys
//!
//! - `d` - Spending dashboard
//! - `c` or `:` - Therapist chat
//! - `t` - Tools (roommates & gigs)
//! - `r` - Re-fetch the dashboard
//! - `?` or `h` - Help
//! - `q` - Quit
//! - `Tab` - Cycle views
//! - `Esc` - Cancel/back

pub mod app;
pub mod chat_panel;
pub mod dashboard_panel;
pub mod event;
pub mod format;
pub mod net;
pub mod session;
pub mod tools_panel;
pub mod view;

pub use app::{App, AppResult};
pub use session::{ChatSession, FALLBACK_BOT_MESSAGE};
pub use view::View;
