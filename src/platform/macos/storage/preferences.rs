//! Preferences persisted in NSUserDefaults.

use crate::model::{CursorSize, PREF_CURSOR_SIZE};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, ns_id, nsstring};
use crate::preferences::Preferences;

/// Reads a double from NSUserDefaults, returns `default` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: ns_id(&k)];
    if obj == nil {
        default
    } else {
        msg_send![ud, doubleForKey: ns_id(&k)]
    }
}

/// Saves a double to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_double(key: &str, val: f64) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let _: () = msg_send![ud, setDouble: val, forKey: ns_id(&k)];
}

/// Cursor size stored as points under `cursorSize`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDefaultsPreferences;

impl Preferences for UserDefaultsPreferences {
    fn cursor_size(&self) -> CursorSize {
        let points = unsafe { prefs_get_double(PREF_CURSOR_SIZE, 0.0) };
        CursorSize::from_points(points)
    }

    fn set_cursor_size(&mut self, size: CursorSize) {
        unsafe { prefs_set_double(PREF_CURSOR_SIZE, size.points() as f64) };
    }
}
