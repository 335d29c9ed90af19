//! Notification observers: app termination and workspace changes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{publish, AppEvent};
use crate::manager::CursorManager;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, RcBlock};

unsafe fn add_observer(center: id, name: &std::ffi::CStr, block: &RcBlock<dyn Fn(id)>) {
    let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name.as_ptr()];
    let _: id = msg_send![
        center,
        addObserverForName: name,
        object: nil,
        queue: nil,
        usingBlock: &**block
    ];
}

/// Shut the cursor manager down when the app terminates, restoring the
/// native pointer and releasing the overlay.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_termination_observer(manager: Rc<RefCell<CursorManager>>) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let block = RcBlock::new(move |_note: id| match manager.try_borrow_mut() {
        Ok(mut manager) => manager.shutdown(),
        Err(_) => log::warn!("[APP] Manager busy at termination"),
    });
    add_observer(center, c"NSApplicationWillTerminateNotification", &block);
}

/// Re-hide the native pointer as soon as the active space changes or the
/// machine wakes, rather than waiting for the next enforcer tick.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_workspace_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let center: id = msg_send![ws, notificationCenter];

    let block = RcBlock::new(|_note: id| publish(AppEvent::ReassertSuppression));
    add_observer(center, c"NSWorkspaceActiveSpaceDidChangeNotification", &block);
    add_observer(center, c"NSWorkspaceDidWakeNotification", &block);
    add_observer(center, c"NSWorkspaceSessionDidBecomeActiveNotification", &block);
}
