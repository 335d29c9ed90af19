//! CoreGraphics / CoreFoundation declarations not covered by `core-graphics`.
//!
//! Includes two private window-server calls (`CGS*`) used to keep pointer
//! suppression effective while the app is in the background.

use std::ffi::c_void;

use objc2::encode::{Encoding, RefEncode};

/// Opaque CGImage for `msg_send!` arguments (`^{CGImage=}`).
#[repr(C)]
pub struct RawCGImage {
    _private: [u8; 0],
}

// SAFETY: CGImage is an opaque Core Graphics type
unsafe impl RefEncode for RawCGImage {
    const ENCODING_REF: Encoding = Encoding::Pointer(&Encoding::Struct("CGImage", &[]));
}

pub type CFTypeRef = *const c_void;
pub type CFStringRef = *const c_void;
pub type CGSConnectionID = i32;

/// `kCGCursorWindowLevelKey`
pub const K_CG_CURSOR_WINDOW_LEVEL_KEY: i32 = 19;

/// `NSCompositingOperationClear`
pub const NS_COMPOSITING_OPERATION_CLEAR: usize = 0;
/// `NSCompositingOperationSourceOver`
pub const NS_COMPOSITING_OPERATION_SOURCE_OVER: usize = 2;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    pub fn CGWindowLevelForKey(key: i32) -> i32;

    // Private SkyLight/CoreGraphics SPI.
    pub fn CGSMainConnectionID() -> CGSConnectionID;
    pub fn CGSSetConnectionProperty(
        cid: CGSConnectionID,
        target_cid: CGSConnectionID,
        key: CFStringRef,
        value: CFTypeRef,
    ) -> i32;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub static kCFBooleanTrue: CFTypeRef;
    pub fn CFRelease(cf: CFTypeRef);
}

#[link(name = "AppKit", kind = "framework")]
extern "C" {
    pub fn NSRectFillUsingOperation(rect: objc2_foundation::NSRect, op: usize);
}

/// Window level that floats above the dock, the menu bar and full-screen apps.
pub fn cursor_window_level() -> isize {
    unsafe { CGWindowLevelForKey(K_CG_CURSOR_WINDOW_LEVEL_KEY) as isize }
}
