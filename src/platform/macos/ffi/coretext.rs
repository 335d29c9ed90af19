//! FFI bindings for CoreText line layout (emoji glyph rendering).

use std::ffi::c_void;

use objc2_core_foundation::CGFloat;

pub type CTLineRef = *const c_void;
pub type CFAttributedStringRef = *const c_void;
pub type CGContextRef = *mut c_void;

#[link(name = "CoreText", kind = "framework")]
extern "C" {
    pub fn CTLineCreateWithAttributedString(string: CFAttributedStringRef) -> CTLineRef;

    /// Returns the typographic width; fills ascent, descent and leading.
    pub fn CTLineGetTypographicBounds(
        line: CTLineRef,
        ascent: *mut CGFloat,
        descent: *mut CGFloat,
        leading: *mut CGFloat,
    ) -> f64;

    /// Draws at the context's current text position.
    pub fn CTLineDraw(line: CTLineRef, context: CGContextRef);
}
