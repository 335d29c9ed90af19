//! Cursor view: an NSView subclass that draws one NSImage at its top-left.
//!
//! The view is flipped (y down) to match the engine's raster space.

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::platform::macos::ffi::bridge::{id, msg_send, nil, sel, Bool, NSPoint, NSRect, NSSize, ObjectExt, YES};
use crate::platform::macos::ffi::{
    NSRectFillUsingOperation, NS_COMPOSITING_OPERATION_CLEAR, NS_COMPOSITING_OPERATION_SOURCE_OVER,
};

const IMAGE_IVAR: &str = "_image";

/// Register the view class (once) and create an instance of `size`.
///
/// # Safety
/// Main thread only.
pub unsafe fn create_cursor_view(size: NSSize) -> Option<id> {
    let class_name = c"MouseFunCursorView";
    let cls = match AnyClass::get(class_name) {
        Some(cls) => cls,
        None => {
            let superclass = AnyClass::get(c"NSView")?;
            let mut builder = ClassBuilder::new(class_name, superclass)?;
            builder.add_ivar::<id>(c"_image");
            builder.add_method(
                sel!(drawRect:),
                draw_rect as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(
                sel!(isFlipped),
                is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
            );
            builder.add_method(
                sel!(isOpaque),
                is_opaque as unsafe extern "C-unwind" fn(_, _) -> _,
            );
            builder.register()
        }
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), size);
    let view: id = msg_send![view, initWithFrame: frame];
    if view == nil {
        return None;
    }
    (*view).store_ivar::<id>(IMAGE_IVAR, nil);
    Some(view)
}

/// Swap the drawn image (retained) and request a redraw.
///
/// # Safety
/// `view` must come from [`create_cursor_view`]; `image` must be nil or an
/// NSImage. Main thread only.
pub unsafe fn set_view_image(view: id, image: id) {
    let old: id = *(*view).load_ivar::<id>(IMAGE_IVAR);
    if image != nil {
        let _: id = msg_send![image, retain];
    }
    (*view).store_ivar::<id>(IMAGE_IVAR, image);
    if old != nil {
        let _: () = msg_send![old, release];
    }
    let _: () = msg_send![view, setNeedsDisplay: YES];
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, dirty: NSRect) {
    NSRectFillUsingOperation(dirty, NS_COMPOSITING_OPERATION_CLEAR);

    let image: id = *this.load_ivar::<id>(IMAGE_IVAR);
    if image == nil {
        return;
    }
    let size: NSSize = msg_send![image, size];
    let target = NSRect::new(NSPoint::new(0.0, 0.0), size);
    let _: () = msg_send![
        image,
        drawInRect: target,
        fromRect: NSRect::ZERO,
        operation: NS_COMPOSITING_OPERATION_SOURCE_OVER,
        fraction: 1.0f64,
        respectFlipped: YES,
        hints: nil
    ];
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

unsafe extern "C-unwind" fn is_opaque(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::NO
}
