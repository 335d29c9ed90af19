//! Image rasterizer.
//!
//! Turns a vector icon or a text glyph into a fixed-size RGBA raster with a
//! transparent background. Rasterization is pure: the same request always
//! yields the same pixels and nothing is cached here.
//!
//! - [`vector`]: SVG decode at intrinsic size, aspect-fit, center
//! - [`glyph`]: text glyph centered in a transparent square
//! - [`assets`]: name → SVG bytes lookup

pub mod assets;
pub mod glyph;
pub mod vector;

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

use crate::error::{CursorError, Result};
use crate::model::{SelectionKind, SelectionRequest, Size};

pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore};
pub use glyph::{rasterize_glyph, GlyphRenderer};
pub use vector::rasterize_svg;

/// Immutable RGBA8 raster (straight alpha, row 0 at the top).
///
/// Cloning shares the pixel buffer.
#[derive(Clone, PartialEq)]
pub struct RasterImage {
    pixels: Arc<RgbaImage>,
}

impl RasterImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Fully transparent image of the given size.
    pub fn transparent(size: Size) -> Self {
        Self::new(RgbaImage::new(size.width, size.height))
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Raw RGBA bytes, `4 * width` per row.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Alpha of the pixel at (x, y), 0 when out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0[3]).unwrap_or(0)
    }

    /// Returns true if two images share the same pixel buffer.
    pub fn ptr_eq(&self, other: &RasterImage) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        f.debug_struct("RasterImage")
            .field("width", &size.width)
            .field("height", &size.height)
            .finish()
    }
}

pub(crate) fn check_target(target: Size) -> Result<()> {
    if target.is_empty() {
        return Err(CursorError::InvalidSize {
            width: target.width,
            height: target.height,
        });
    }
    Ok(())
}

/// Rasterizer bound to an asset store and a text facility.
pub struct Rasterizer {
    assets: Box<dyn AssetStore>,
    glyphs: Box<dyn GlyphRenderer>,
}

impl Rasterizer {
    pub fn new(assets: Box<dyn AssetStore>, glyphs: Box<dyn GlyphRenderer>) -> Self {
        Self { assets, glyphs }
    }

    /// Produce the raster for a selection request.
    pub fn rasterize(&self, request: &SelectionRequest) -> Result<RasterImage> {
        check_target(request.size)?;
        match request.kind {
            SelectionKind::VectorIcon => {
                let bytes = self.assets.load(&request.payload)?;
                rasterize_svg(&request.payload, &bytes, request.size)
            }
            SelectionKind::Emoji => {
                rasterize_glyph(self.glyphs.as_ref(), &request.payload, request.size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_image() {
        let img = RasterImage::transparent(Size::new(3, 2));
        assert_eq!(img.size(), Size::new(3, 2));
        assert_eq!(img.as_bytes().len(), 3 * 2 * 4);
        assert!(img.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_alpha_at_out_of_bounds_is_zero() {
        let img = RasterImage::transparent(Size::square(2));
        assert_eq!(img.alpha_at(5, 5), 0);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let a = RasterImage::transparent(Size::square(4));
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&RasterImage::transparent(Size::square(4))));
    }

    #[test]
    fn test_check_target_rejects_empty() {
        assert_eq!(
            check_target(Size::new(0, 32)),
            Err(CursorError::InvalidSize {
                width: 0,
                height: 32
            })
        );
        assert!(check_target(Size::square(1)).is_ok());
    }
}
