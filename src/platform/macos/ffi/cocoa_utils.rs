//! Cocoa coordinate helpers.
//!
//! Cocoa's global space has its origin at the bottom-left of the primary
//! screen. The engine works top-left, y down; these helpers convert.

use super::bridge::{get_class, id, msg_send, nil, NSPoint, NSRect};
use crate::model::Point;

/// Height of the primary screen (the one holding the menu bar).
///
/// # Safety
/// Main thread only.
pub unsafe fn primary_screen_height() -> Option<f64> {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    if screens == nil {
        return None;
    }
    let count: usize = msg_send![screens, count];
    if count == 0 {
        return None;
    }
    let primary: id = msg_send![screens, objectAtIndex: 0usize];
    let frame: NSRect = msg_send![primary, frame];
    Some(frame.size.height)
}

/// Global pointer location in Cocoa coordinates.
pub fn mouse_location_cocoa() -> NSPoint {
    unsafe { msg_send![get_class("NSEvent"), mouseLocation] }
}

/// Cocoa point → top-left point.
pub fn from_cocoa(p: NSPoint, primary_height: f64) -> Point {
    Point::new(p.x, primary_height - p.y)
}

/// Top-left corner of a frame of `height` → Cocoa frame origin (bottom-left).
pub fn frame_origin_to_cocoa(top_left: Point, height: f64, primary_height: f64) -> NSPoint {
    NSPoint::new(top_left.x, primary_height - top_left.y - height)
}
