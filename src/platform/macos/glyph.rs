//! CoreText glyph renderer.
//!
//! Lays out the text as a single `CTLine` in the system font (CoreText falls
//! back to Apple Color Emoji for emoji) and draws it into an RGBA bitmap
//! context sized to the line's typographic bounds.

use std::ffi::c_void;

use core_graphics::base::kCGImageAlphaPremultipliedLast;
use core_graphics::color_space::CGColorSpace;
use core_graphics::context::CGContext;
use foreign_types::ForeignType;
use image::{Rgba, RgbaImage};

use super::ffi::bridge::{autoreleasepool, get_class, id, msg_send, nil, ns_id, nsstring};
use super::ffi::coretext::{CTLineCreateWithAttributedString, CTLineDraw, CTLineGetTypographicBounds};
use super::ffi::CFRelease;
use crate::error::{CursorError, Result};
use crate::raster::GlyphRenderer;

/// Value of `NSFontAttributeName`.
const NS_FONT_ATTRIBUTE: &str = "NSFont";

/// Value of `NSForegroundColorAttributeName`.
const NS_FOREGROUND_COLOR_ATTRIBUTE: &str = "NSColor";

#[derive(Debug, Default, Clone, Copy)]
pub struct CoreTextGlyphRenderer;

impl GlyphRenderer for CoreTextGlyphRenderer {
    fn render(&self, text: &str, font_size: f64) -> Result<RgbaImage> {
        autoreleasepool(|| unsafe { render_line(text, font_size) })
    }
}

unsafe fn render_line(text: &str, font_size: f64) -> Result<RgbaImage> {
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: font_size];
    // labelColor keeps non-emoji glyphs legible in dark mode
    let color: id = msg_send![get_class("NSColor"), labelColor];
    let font_key = nsstring(NS_FONT_ATTRIBUTE);
    let color_key = nsstring(NS_FOREGROUND_COLOR_ATTRIBUTE);
    let objects = [font, color];
    let keys = [ns_id(&font_key), ns_id(&color_key)];
    let attrs: id = msg_send![
        get_class("NSDictionary"),
        dictionaryWithObjects: objects.as_ptr(),
        forKeys: keys.as_ptr(),
        count: objects.len()
    ];
    let string = nsstring(text);
    let attributed: id = msg_send![get_class("NSAttributedString"), alloc];
    let attributed: id = msg_send![attributed, initWithString: ns_id(&string), attributes: attrs];
    if attributed == nil {
        return Err(CursorError::GlyphRenderFailed("attributed string".into()));
    }

    // NSAttributedString is toll-free bridged to CFAttributedString.
    let line = CTLineCreateWithAttributedString(attributed as *const c_void);
    let _: () = msg_send![attributed, release];
    if line.is_null() {
        return Err(CursorError::GlyphRenderFailed("CTLineCreateWithAttributedString".into()));
    }

    let (mut ascent, mut descent, mut leading) = (0.0, 0.0, 0.0);
    let width = CTLineGetTypographicBounds(line, &mut ascent, &mut descent, &mut leading);
    let w = width.ceil().max(1.0) as usize;
    let h = (ascent + descent).ceil().max(1.0) as usize;

    let mut ctx = CGContext::create_bitmap_context(
        None,
        w,
        h,
        8,
        0,
        &CGColorSpace::create_device_rgb(),
        kCGImageAlphaPremultipliedLast,
    );
    ctx.set_text_position(0.0, descent);
    CTLineDraw(line, ctx.as_ptr() as *mut c_void);
    CFRelease(line);

    let stride = ctx.bytes_per_row();
    Ok(unpremultiply(ctx.data(), w as u32, h as u32, stride))
}

/// Copy a premultiplied RGBA bitmap (row 0 at the top) into a straight-alpha image.
fn unpremultiply(data: &[u8], width: u32, height: u32, stride: usize) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let i = y as usize * stride + x as usize * 4;
        let [r, g, b, a] = [data[i], data[i + 1], data[i + 2], data[i + 3]];
        if a == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let un = |c: u8| ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8;
        Rgba([un(r), un(g), un(b), a])
    })
}
