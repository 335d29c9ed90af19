//! Application-level helpers.

use std::path::PathBuf;

use crate::model::ASSETS_DIR_ENV;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, string_from_ns, NSApp};

/// NSApplicationActivationPolicyAccessory
const ACTIVATION_POLICY_ACCESSORY: isize = 1;

/// Run as a menu bar app: no Dock icon, no main menu.
///
/// # Safety
/// Main thread only.
pub unsafe fn set_accessory_policy() {
    let _: bool = msg_send![NSApp(), setActivationPolicy: ACTIVATION_POLICY_ACCESSORY];
}

/// Directory holding the cursor SVGs.
///
/// `MOUSE_FUN_ASSETS` wins; otherwise the bundle's resource directory, or the
/// executable's directory when running unbundled.
///
/// # Safety
/// Main thread only.
pub unsafe fn assets_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(ASSETS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
    if bundle != nil {
        let path = string_from_ns(msg_send![bundle, resourcePath]);
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
