//! Text glyph rasterization.
//!
//! Shaping and font fallback belong to the platform text facility behind
//! [`GlyphRenderer`]; this module only sizes the font and centers the result.

use image::imageops;
use image::RgbaImage;

use super::{check_target, RasterImage};
use crate::error::{CursorError, Result};
use crate::model::{Size, GLYPH_FONT_SCALE};

/// Platform text facility (CoreText on macOS).
pub trait GlyphRenderer {
    /// Render `text` at `font_size` points into a tightly sized, transparent
    /// straight-alpha image.
    fn render(&self, text: &str, font_size: f64) -> Result<RgbaImage>;
}

/// Font size used for a target square: `0.8 ×` its edge.
pub fn font_size_for(target: Size) -> f64 {
    target.width.min(target.height) as f64 * GLYPH_FONT_SCALE
}

/// Render `text` centered within a transparent canvas of exactly `target`.
///
/// Glyph images larger than the canvas are clipped symmetrically.
pub fn rasterize_glyph(
    renderer: &dyn GlyphRenderer,
    text: &str,
    target: Size,
) -> Result<RasterImage> {
    check_target(target)?;
    if text.trim().is_empty() {
        return Err(CursorError::GlyphRenderFailed("empty glyph text".into()));
    }

    let glyph = renderer.render(text, font_size_for(target))?;

    let mut canvas = RgbaImage::new(target.width, target.height);
    let x = (target.width as i64 - glyph.width() as i64) / 2;
    let y = (target.height as i64 - glyph.height() as i64) / 2;
    imageops::replace(&mut canvas, &glyph, x, y);
    Ok(RasterImage::new(canvas))
}
