//! Native pointer access: location, visibility and background suppression.

use core_graphics::display::CGDisplay;

use super::ffi::bridge::{get_class, msg_send, ns_id, nsstring};
use super::ffi::{
    from_cocoa, kCFBooleanTrue, mouse_location_cocoa, primary_screen_height, CGSMainConnectionID,
    CGSSetConnectionProperty,
};
use crate::error::{CursorError, Result};
use crate::model::Point;
use crate::suppression::{HideLatch, NativePointerController};
use crate::tracker::PointerSource;

/// Connection property that lets a background app hide the pointer.
const SETS_CURSOR_IN_BACKGROUND: &str = "SetsCursorInBackground";

/// The system pointer.
///
/// `+[NSCursor hide]` and `CGDisplayHideCursor` each keep a per-process hide
/// count. Each has its own latch, so the 100 Hz re-hide never pushes either
/// count past one and a single show restores the pointer.
#[derive(Default)]
pub struct MacPointer {
    cursor: HideLatch,
    display: HideLatch,
}

impl MacPointer {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ns_cursor_hide() -> Result<()> {
    unsafe {
        let _: () = msg_send![get_class("NSCursor"), hide];
    }
    Ok(())
}

fn ns_cursor_unhide() -> Result<()> {
    unsafe {
        let _: () = msg_send![get_class("NSCursor"), unhide];
    }
    Ok(())
}

fn display_hide() -> Result<()> {
    CGDisplay::main()
        .hide_cursor()
        .map_err(|code| CursorError::PlatformCallFailed {
            call: "CGDisplayHideCursor",
            code,
        })
}

fn display_show() -> Result<()> {
    CGDisplay::main()
        .show_cursor()
        .map_err(|code| CursorError::PlatformCallFailed {
            call: "CGDisplayShowCursor",
            code,
        })
}

impl PointerSource for MacPointer {
    fn location(&self) -> Result<Point> {
        let height = unsafe { primary_screen_height() }.ok_or(CursorError::PlatformCallFailed {
            call: "NSScreen.screens",
            code: 0,
        })?;
        Ok(from_cocoa(mouse_location_cocoa(), height))
    }
}

impl NativePointerController for MacPointer {
    fn hide(&self) -> Result<()> {
        self.cursor.hide(ns_cursor_unhide, ns_cursor_hide)?;
        self.display.hide(display_show, display_hide)
    }

    fn show(&self) -> Result<()> {
        let cursor = self.cursor.show(ns_cursor_unhide);
        let display = self.display.show(display_show);
        log::debug!("[SUPPRESS] Native pointer restored");
        cursor.and(display)
    }

    fn authorize_background_suppression(&self) -> Result<()> {
        let key = nsstring(SETS_CURSOR_IN_BACKGROUND);
        let code = unsafe {
            let cid = CGSMainConnectionID();
            CGSSetConnectionProperty(cid, cid, ns_id(&key) as *const _, kCFBooleanTrue)
        };
        if code != 0 {
            return Err(CursorError::PlatformCallFailed {
                call: "CGSSetConnectionProperty",
                code,
            });
        }
        Ok(())
    }
}
