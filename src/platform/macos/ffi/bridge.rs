//! Thin objc2 shim.
//!
//! AppKit is driven through untyped `msg_send!` on `id` pointers; this module
//! collects the aliases and helpers that style needs in one import.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CString;

pub use objc2::encode::Encode;
pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2_app_kit::NSApplication;

pub use block2::RcBlock;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C `BOOL` YES / NO (not Rust `bool`).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Raw pointer to a retained NSString, for `msg_send!` arguments typed `id`.
#[inline]
pub fn ns_id(s: &Retained<NSString>) -> id {
    Retained::as_ptr(s) as *mut NSString as id
}

/// Copy an NSString (`id`) into a Rust `String`. `nil` yields an empty string.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn string_from_ns(s: id) -> String {
    if s.is_null() {
        return String::new();
    }
    let utf8: *const std::ffi::c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return String::new();
    }
    std::ffi::CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Look up an Objective-C class by name.
///
/// AppKit and Foundation classes always exist once the frameworks are linked,
/// so a miss is a programming error.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    CString::new(name)
        .ok()
        .and_then(|c| AnyClass::get(&c))
        .unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}

/// Instance variable access on classes built with `ClassBuilder`.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}
