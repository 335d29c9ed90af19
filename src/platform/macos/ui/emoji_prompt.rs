//! Modal prompt asking for a custom emoji.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, ns_id, nsstring, string_from_ns, NSApp, NSPoint, NSRect, NSSize, YES,
};

/// NSAlertStyleInformational
const ALERT_STYLE_INFORMATIONAL: usize = 1;
/// NSAlertFirstButtonReturn
const FIRST_BUTTON: isize = 1000;

/// Run the prompt. Returns the trimmed text when the user pressed Apply and
/// entered something.
///
/// # Safety
/// Main thread only. Spins a modal run loop.
pub unsafe fn prompt_for_emoji(current: Option<&str>) -> Option<String> {
    let alert: id = msg_send![get_class("NSAlert"), alloc];
    let alert: id = msg_send![alert, init];
    let message = nsstring("Custom Emoji Cursor");
    let info = nsstring("Enter an emoji to use as your cursor:");
    let _: () = msg_send![alert, setMessageText: ns_id(&message)];
    let _: () = msg_send![alert, setInformativeText: ns_id(&info)];
    let _: () = msg_send![alert, setAlertStyle: ALERT_STYLE_INFORMATIONAL];

    let field: id = msg_send![get_class("NSTextField"), alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(200.0, 24.0));
    let field: id = msg_send![field, initWithFrame: frame];
    let placeholder = nsstring("🎯");
    let _: () = msg_send![field, setPlaceholderString: ns_id(&placeholder)];
    if let Some(current) = current {
        let value = nsstring(current);
        let _: () = msg_send![field, setStringValue: ns_id(&value)];
    }
    let _: () = msg_send![alert, setAccessoryView: field];

    let apply = nsstring("Apply");
    let cancel = nsstring("Cancel");
    let _: id = msg_send![alert, addButtonWithTitle: ns_id(&apply)];
    let _: id = msg_send![alert, addButtonWithTitle: ns_id(&cancel)];

    // accessory apps are never active on their own
    let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
    let window: id = msg_send![alert, window];
    if window != nil {
        let _: () = msg_send![window, setInitialFirstResponder: field];
    }

    let response: isize = msg_send![alert, runModal];
    let text = string_from_ns(msg_send![field, stringValue]);

    let _: () = msg_send![field, release];
    let _: () = msg_send![alert, release];

    if response != FIRST_BUTTON {
        return None;
    }
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
