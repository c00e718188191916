//! Event handling for the FinAura TUI.
//!
//! Provides keyboard input handling and event routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::View;

/// Application-level events that can trigger state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Switch to a specific view
    SwitchView(View),
    /// Cycle to the next view
    NextView,
    /// Cycle to the previous view
    PrevView,
    /// Show help overlay
    ShowHelp,
    /// Request application quit
    Quit,
    /// Force quit (Ctrl+C)
    ForceQuit,
    /// Re-fetch the dashboard snapshot
    Refresh,
    /// Cancel current operation / close overlay
    Cancel,
    /// Navigate up in a list
    NavigateUp,
    /// Navigate down in a list
    NavigateDown,
    /// Text input character (chat mode)
    TextInput(char),
    /// Backspace in text input
    Backspace,
    /// Submit the chat input
    Submit,
    /// Nudge the selected roommate (local notification only)
    Nudge,
    /// Generate a cancellation script for the flagged subscription
    /// (local notification only)
    CancellationScript,
    /// Scan a receipt (placeholder; no backend contract exists)
    ScanReceipt,
    /// No action needed
    None,
}

/// Input handler for converting key events to app events.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Whether we're currently in chat/text input mode
    chat_mode: bool,
}

impl InputHandler {
    /// Create a new input handler.
    pub fn new() -> Self {
        Self { chat_mode: false }
    }

    /// Set whether chat/text input mode is active.
    pub fn set_chat_mode(&mut self, active: bool) {
        self.chat_mode = active;
    }

    /// Returns whether chat mode is active.
    pub fn is_chat_mode(&self) -> bool {
        self.chat_mode
    }

    /// Handle a key event and return the corresponding app event.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppEvent {
        // Ctrl+C always force quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEvent::ForceQuit;
        }

        // Escape cancels current operation or exits chat mode
        if key.code == KeyCode::Esc {
            if self.chat_mode {
                self.chat_mode = false;
            }
            return AppEvent::Cancel;
        }

        if self.chat_mode {
            return self.handle_chat_input(key);
        }

        self.handle_normal_mode(key)
    }

    /// Handle input when in chat/text mode.
    fn handle_chat_input(&self, key: KeyEvent) -> AppEvent {
        // Ctrl+S triggers the receipt-scan placeholder
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return AppEvent::ScanReceipt;
        }

        match key.code {
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Char(c) => AppEvent::TextInput(c),
            _ => AppEvent::None,
        }
    }

    /// Handle input when in normal navigation mode.
    fn handle_normal_mode(&mut self, key: KeyEvent) -> AppEvent {
        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Char('Q') => AppEvent::Quit,

            // Help
            KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => AppEvent::ShowHelp,

            // View navigation hotkeys
            KeyCode::Char('d') | KeyCode::Char('D') => AppEvent::SwitchView(View::Dashboard),
            KeyCode::Char('t') | KeyCode::Char('T') => AppEvent::SwitchView(View::Tools),

            // Chat mode activation
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char(':') => {
                self.chat_mode = true;
                AppEvent::SwitchView(View::Chat)
            }

            // Tab cycling
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    AppEvent::PrevView
                } else {
                    AppEvent::NextView
                }
            }
            KeyCode::BackTab => AppEvent::PrevView,

            // List navigation
            KeyCode::Up | KeyCode::Char('k') => AppEvent::NavigateUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::NavigateDown,

            // Actions
            KeyCode::Char('r') | KeyCode::Char('R') => AppEvent::Refresh,
            KeyCode::Char('n') | KeyCode::Char('N') => AppEvent::Nudge,
            KeyCode::Char('s') | KeyCode::Char('S') => AppEvent::CancellationScript,

            _ => AppEvent::None,
        }
    }
}
