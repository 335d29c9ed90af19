//! Main-loop event dispatch on macOS.
//!
//! Drains the global event bus, applies the batch through the pure
//! dispatcher, then performs the UI follow-ups it asks for once the manager
//! is released.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{drain_events, publish, AppEvent};
use crate::handlers::{dispatch_events, Dispatch};
use crate::manager::CursorManager;
use crate::platform::macos::ffi::bridge::{msg_send, nil, NSApp};
use crate::platform::macos::storage::UserDefaultsPreferences;
use crate::platform::macos::ui::{prompt_for_emoji, StatusBar};
use crate::preferences::Preferences;

/// Everything the dispatch tick needs, owned by the run loop.
pub struct AppShell {
    pub manager: Rc<RefCell<CursorManager>>,
    pub prefs: RefCell<UserDefaultsPreferences>,
    pub status_bar: StatusBar,
}

impl AppShell {
    /// Dispatch all pending events.
    ///
    /// # Safety
    /// Main thread only.
    pub unsafe fn dispatch_pending(&self) {
        let follow_ups = {
            // re-entered from a nested run loop; events stay queued for the next tick
            let Ok(mut manager) = self.manager.try_borrow_mut() else {
                return;
            };
            let mut prefs = self.prefs.borrow_mut();
            dispatch_events(&mut manager, &mut *prefs, drain_events())
        };
        for outcome in follow_ups {
            self.follow_up(outcome);
        }
    }

    unsafe fn follow_up(&self, outcome: Dispatch) {
        match outcome {
            Dispatch::Done => {}
            Dispatch::PromptEmoji(current) => {
                if let Some(text) = prompt_for_emoji(current.as_deref()) {
                    publish(AppEvent::SelectEmoji(text));
                }
            }
            Dispatch::SizeChanged => {
                let size = self.prefs.borrow().cursor_size();
                self.status_bar.refresh(size);
            }
            Dispatch::Quit => {
                log::info!("[DISPATCH] Quit requested");
                let _: () = msg_send![NSApp(), terminate: nil];
            }
        }
    }
}
