//! Overlay state (pure Rust, no FFI).

use crate::model::{HotSpot, Point, Size};
use crate::raster::RasterImage;

/// What the overlay currently shows and where.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    /// Image being drawn, `None` before the first selection.
    pub image: Option<RasterImage>,
    /// Hot spot paired with `image`.
    pub hot_spot: HotSpot,
    /// Window top-left in screen space, `None` until first placed.
    pub origin: Option<Point>,
    /// Window size: the image size, at least the minimum edge.
    pub frame_size: Size,
    /// Whether the window is ordered front.
    pub visible: bool,
}

impl OverlayState {
    pub fn image_size(&self) -> Option<Size> {
        self.image.as_ref().map(RasterImage::size)
    }
}
