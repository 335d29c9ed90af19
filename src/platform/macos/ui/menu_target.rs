//! Target object for status bar menu actions.
//!
//! Each action turns the clicked item's tag into an [`AppEvent`] and publishes
//! it; the dispatcher applies it on the next main-loop tick.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::events::{publish, AppEvent};
use crate::model::{CursorSize, CursorStyle};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, sel};

/// Register the target class (once) and create an instance. The instance is
/// never released.
///
/// # Safety
/// Main thread only.
pub unsafe fn create_menu_target() -> Option<id> {
    let class_name = c"MouseFunMenuTarget";
    let cls = match AnyClass::get(class_name) {
        Some(cls) => cls,
        None => {
            let superclass = AnyClass::get(c"NSObject")?;
            let mut builder = ClassBuilder::new(class_name, superclass)?;
            builder.add_method(
                sel!(cursorStyleSelected:),
                cursor_style_selected as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(
                sel!(cursorSizeSelected:),
                cursor_size_selected as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(
                sel!(resetCursor:),
                reset_cursor as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(
                sel!(quitApp:),
                quit_app as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.register()
        }
    };
    let target: id = msg_send![cls, new];
    (target != nil).then_some(target)
}

unsafe fn sender_tag(sender: id) -> isize {
    if sender == nil {
        return -1;
    }
    msg_send![sender, tag]
}

unsafe extern "C-unwind" fn cursor_style_selected(_this: &AnyObject, _cmd: Sel, sender: id) {
    match CursorStyle::from_tag(sender_tag(sender)) {
        Some(CursorStyle::CustomEmoji) => publish(AppEvent::RequestCustomEmoji),
        Some(style) => publish(AppEvent::SelectStyle(style)),
        None => log::warn!("[MENU] Unknown style tag"),
    }
}

unsafe extern "C-unwind" fn cursor_size_selected(_this: &AnyObject, _cmd: Sel, sender: id) {
    let tag = sender_tag(sender);
    match usize::try_from(tag).ok().and_then(|i| CursorSize::ALL.get(i)) {
        Some(size) => publish(AppEvent::SetSize(*size)),
        None => log::warn!("[MENU] Unknown size tag {}", tag),
    }
}

unsafe extern "C-unwind" fn reset_cursor(_this: &AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Reset);
}

unsafe extern "C-unwind" fn quit_app(_this: &AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Quit);
}
