//! Chat session state for the financial-therapist view.
//!
//! The transcript is session-local and volatile: it lives only as long as
//! the process and is never persisted. Each message cycle is a small state
//! machine, `Idle -> AwaitingReply -> Idle`, with exactly one bot message
//! appended per settlement - the real reply on success, a literal fallback
//! on failure.

use finaura_api::ApiError;
use tracing::warn;

/// Literal bot message appended when a chat send fails.
pub const FALLBACK_BOT_MESSAGE: &str = "⚠️ Error: AI Brain is offline.";

/// Seeded greeting, always the first transcript entry.
const GREETING: &str =
    "Hi, I'm your Financial Therapist. How are you feeling about your budget today?";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Append-only chat transcript plus the input buffer and typing flag.
///
/// Owned exclusively by the chat view; no other component sees it.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    awaiting_reply: bool,
}

impl ChatSession {
    /// Create a session seeded with exactly one bot greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::bot(GREETING)],
            input: String::new(),
            awaiting_reply: false,
        }
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a reply is pending (drives the "Typing..." indicator).
    pub fn is_typing(&self) -> bool {
        self.awaiting_reply
    }

    /// Append a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Remove the last character from the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Attempt the `Idle -> AwaitingReply` transition.
    ///
    /// Returns the text to send if the transition happened: the user
    /// message is appended, the input buffer cleared, and the typing
    /// flag set. Two cases are no-ops returning `None`:
    ///
    /// - empty or whitespace-only input (no transcript mutation)
    /// - a reply is already pending - sends are ignored, not queued,
    ///   and the input buffer is left intact
    pub fn begin_send(&mut self) -> Option<String> {
        if self.awaiting_reply {
            return None;
        }
        if self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text.clone()));
        self.awaiting_reply = true;
        Some(text)
    }

    /// The `AwaitingReply -> Idle` transition.
    ///
    /// Appends exactly one bot message: the reply text on success, the
    /// literal [`FALLBACK_BOT_MESSAGE`] on failure. The user's message
    /// stays in place either way.
    pub fn resolve(&mut self, reply: Result<String, ApiError>) {
        let text = match reply {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "chat send failed, appending fallback");
                FALLBACK_BOT_MESSAGE.to_string()
            }
        };
        self.messages.push(Message::bot(text));
        self.awaiting_reply = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
