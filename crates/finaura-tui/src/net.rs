//! Network bridge between the synchronous render loop and the API client.
//!
//! Requests are spawned onto the tokio runtime handle; settled results
//! come back over an unbounded channel that the render loop pumps with
//! `try_recv`. Nothing is retried or cancelled: every spawned request
//! settles exactly once, successfully or not.

use finaura_api::{ApiClient, ApiError, ChatReply, DashboardSnapshot};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// A settled network result delivered to the render loop.
#[derive(Debug)]
pub enum NetMessage {
    /// Outcome of a dashboard fetch.
    Dashboard(Result<DashboardSnapshot, ApiError>),
    /// Outcome of a chat send.
    Chat(Result<ChatReply, ApiError>),
}

/// Spawns API requests and funnels their results back to the app.
pub struct NetBridge {
    handle: tokio::runtime::Handle,
    client: ApiClient,
    tx: UnboundedSender<NetMessage>,
}

impl NetBridge {
    /// Create a bridge and the receiver end the app should pump.
    pub fn new(
        client: ApiClient,
        handle: tokio::runtime::Handle,
    ) -> (Self, UnboundedReceiver<NetMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, client, tx }, rx)
    }

    /// Spawn a dashboard fetch. At most one should be in flight; the app
    /// guards this with its pending flag.
    pub fn fetch_dashboard(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.fetch_dashboard().await;
            debug!(ok = result.is_ok(), "dashboard fetch settled");
            // Receiver only drops on shutdown; nothing to do then
            let _ = tx.send(NetMessage::Dashboard(result));
        });
    }

    /// Spawn a chat send. The session state machine guarantees at most
    /// one is pending.
    pub fn send_chat(&self, message: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.send_chat(&message).await;
            debug!(ok = result.is_ok(), "chat send settled");
            let _ = tx.send(NetMessage::Chat(result));
        });
    }
}
