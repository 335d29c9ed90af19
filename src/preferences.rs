//! Persistent user preferences.
//!
//! Only the cursor size is persisted. The macOS store is NSUserDefaults
//! (`platform::macos::storage`).

use crate::model::CursorSize;

pub trait Preferences {
    fn cursor_size(&self) -> CursorSize;

    fn set_cursor_size(&mut self, size: CursorSize);
}

/// Non-persistent preferences, for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    cursor_size: CursorSize,
}

impl MemoryPreferences {
    pub fn new(cursor_size: CursorSize) -> Self {
        Self { cursor_size }
    }
}

impl Preferences for MemoryPreferences {
    fn cursor_size(&self) -> CursorSize {
        self.cursor_size
    }

    fn set_cursor_size(&mut self, size: CursorSize) {
        self.cursor_size = size;
    }
}
