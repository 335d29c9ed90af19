//! Event dispatcher.
//!
//! Applies drained [`AppEvent`]s to the cursor manager and the preference
//! store. UI-only follow-ups (the emoji prompt, quitting, refreshing menu
//! checkmarks) are returned to the platform shell as a [`Dispatch`] value.
//!
//! ```text
//! drain_events() → dispatch_event() → CursorManager / Preferences
//!                                   ↘ Dispatch (prompt, quit, refresh menu)
//! ```

use crate::events::AppEvent;
use crate::manager::CursorManager;
use crate::model::CursorStyle;
use crate::preferences::Preferences;

/// What the shell should do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing further.
    Done,
    /// Show the emoji prompt, prefilled with this text.
    PromptEmoji(Option<String>),
    /// The size preference changed; refresh size checkmarks.
    SizeChanged,
    /// Terminate the application.
    Quit,
}

/// Handle one event.
pub fn dispatch_event(
    manager: &mut CursorManager,
    prefs: &mut dyn Preferences,
    event: AppEvent,
) -> Dispatch {
    log::debug!("[DISPATCH] {}", event.description());
    match event {
        AppEvent::SelectStyle(CursorStyle::Default) | AppEvent::Reset => {
            manager.reset();
            Dispatch::Done
        }

        AppEvent::SelectStyle(CursorStyle::CustomEmoji) | AppEvent::RequestCustomEmoji => {
            Dispatch::PromptEmoji(current_emoji(manager))
        }

        AppEvent::SelectStyle(style) => {
            if let Some(asset) = style.asset_name() {
                // errors are logged by the manager; the previous cursor stays
                let _ = manager.select_vector_icon(asset, prefs.cursor_size().size());
            }
            Dispatch::Done
        }

        AppEvent::SelectEmoji(text) => {
            let glyph = text.trim();
            if glyph.is_empty() {
                log::debug!("[DISPATCH] Empty emoji ignored");
            } else {
                let _ = manager.select_emoji(glyph, prefs.cursor_size().size());
            }
            Dispatch::Done
        }

        AppEvent::SetSize(size) => {
            prefs.set_cursor_size(size);
            let _ = manager.reapply_current_selection(size.size());
            Dispatch::SizeChanged
        }

        AppEvent::ReassertSuppression => {
            manager.reassert_suppression();
            Dispatch::Done
        }

        AppEvent::Quit => Dispatch::Quit,
    }
}

/// Handle a batch of events in order. Returns the follow-ups that need UI.
pub fn dispatch_events(
    manager: &mut CursorManager,
    prefs: &mut dyn Preferences,
    events: impl IntoIterator<Item = AppEvent>,
) -> Vec<Dispatch> {
    events
        .into_iter()
        .map(|event| dispatch_event(manager, prefs, event))
        .filter(|outcome| *outcome != Dispatch::Done)
        .collect()
}

fn current_emoji(manager: &CursorManager) -> Option<String> {
    match manager.selection() {
        crate::model::CursorSelection::Emoji(glyph) => Some(glyph.clone()),
        _ => None,
    }
}
