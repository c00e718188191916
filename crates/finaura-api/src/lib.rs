//! # finaura-api
//!
//! HTTP client and payload types for the FinAura backend.
//!
//! The contract is small and exact:
//! - `GET {base}/dashboard` returns a [`DashboardSnapshot`]
//! - `POST {base}/chat` with `{"message": string}` returns `{"response": string}`
//!
//! All payload validation happens here, at the client boundary. Failures
//! collapse into two user-visible outcomes: a persistent "backend offline"
//! dashboard state, or an inline fallback bot message in the chat.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{
    ChatReply, ChatRequest, DashboardSnapshot, Gig, PeerStat, Roommate, RoommateKind, UnusedSub,
    UserProfile,
};
