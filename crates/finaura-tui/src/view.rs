//! View types and navigation for the FinAura TUI.
//!
//! Views represent the three screens of the dashboard.

use std::fmt;

/// Available views in the FinAura dashboard.
///
/// Each view renders one projection of the backend data. Views can be
/// switched with hotkeys or cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Spending dashboard (safe-to-spend, alerts, peer benchmark)
    #[default]
    Dashboard,
    /// AI financial-therapist chat
    Chat,
    /// Roommate ledger and gig listings
    Tools,
}

impl View {
    /// Returns the hotkey character for this view.
    pub fn hotkey(&self) -> char {
        match self {
            View::Dashboard => 'd',
            View::Chat => 'c',
            View::Tools => 't',
        }
    }

    /// Returns the display title for this view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Chat => "Therapist",
            View::Tools => "Tools",
        }
    }

    /// Returns the hotkey hint for status bar display.
    pub fn hotkey_hint(&self) -> String {
        format!("[{}] {}", self.hotkey(), self.title())
    }

    /// All views in display order (for Tab cycling).
    pub const ALL: [View; 3] = [View::Dashboard, View::Chat, View::Tools];

    /// Returns the next view in the cycle (for Tab navigation).
    pub fn next(&self) -> View {
        let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the previous view in the cycle (for Shift+Tab navigation).
    pub fn prev(&self) -> View {
        let idx = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// Try to parse a view from a hotkey character.
    pub fn from_hotkey(key: char) -> Option<View> {
        match key.to_ascii_lowercase() {
            'd' => Some(View::Dashboard),
            'c' => Some(View::Chat),
            't' => Some(View::Tools),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
