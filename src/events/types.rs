//! Application events for inter-module communication.
//!
//! Published by the menu bar, the emoji prompt and the workspace observers;
//! handled by the dispatcher on the main loop. Pure Rust, no FFI.

use crate::model::{CursorSize, CursorStyle};

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Menu Events ===
    /// A cursor style was picked from the menu.
    SelectStyle(CursorStyle),

    /// The user asked for a custom emoji cursor; show the prompt.
    RequestCustomEmoji,

    /// The emoji prompt was confirmed with this text.
    SelectEmoji(String),

    /// A size was picked from Settings → Cursor Size.
    SetSize(CursorSize),

    /// "Reset to Default" (Cmd+R)
    Reset,

    /// "Quit" (Cmd+Q)
    Quit,

    // === System Events ===
    /// Active space changed; hide the native pointer again right away.
    ReassertSuppression,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SelectStyle(_) => "Select cursor style",
            AppEvent::RequestCustomEmoji => "Prompt for custom emoji",
            AppEvent::SelectEmoji(_) => "Select emoji cursor",
            AppEvent::SetSize(_) => "Change cursor size",
            AppEvent::Reset => "Reset to default cursor",
            AppEvent::Quit => "Quit application",
            AppEvent::ReassertSuppression => "Reassert pointer suppression",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug() {
        let debug_str = format!("{:?}", AppEvent::SelectStyle(CursorStyle::Moon));
        assert_eq!(debug_str, "SelectStyle(Moon)");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::SelectStyle(CursorStyle::Star),
            AppEvent::RequestCustomEmoji,
            AppEvent::SelectEmoji("★".into()),
            AppEvent::SetSize(CursorSize::Small),
            AppEvent::Reset,
            AppEvent::Quit,
            AppEvent::ReassertSuppression,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
