//! Vector icon rasterization.
//!
//! The SVG is decoded once at its intrinsic size by resvg, then resampled
//! with a Lanczos filter to fit the target box without distortion. Icons are
//! usually smaller than the target, so the filter matters.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use super::{check_target, RasterImage};
use crate::error::{CursorError, Result};
use crate::model::{aspect_fit, Size};

fn decode_error(name: &str, reason: impl ToString) -> CursorError {
    CursorError::AssetDecodeError {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Decode SVG bytes into a straight-alpha image at intrinsic size.
pub fn decode_svg(name: &str, bytes: &[u8]) -> Result<RgbaImage> {
    let tree = Tree::from_data(bytes, &Options::default()).map_err(|e| decode_error(name, e))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = Pixmap::new(width.max(1), height.max(1))
        .ok_or_else(|| decode_error(name, format!("invalid intrinsic size {width}x{height}")))?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied pixels
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| decode_error(name, "pixel buffer size mismatch"))
}

/// Fit `source` into a transparent `target` canvas, centered, ratio kept.
pub fn fit_into(source: &RgbaImage, target: Size) -> RgbaImage {
    let fit = aspect_fit(source.width() as f64, source.height() as f64, target);

    let width = (fit.width.round() as u32).clamp(1, target.width);
    let height = (fit.height.round() as u32).clamp(1, target.height);
    let scaled = imageops::resize(source, width, height, FilterType::Lanczos3);

    let mut canvas = RgbaImage::new(target.width, target.height);
    let x = (target.width - width) / 2;
    let y = (target.height - height) / 2;
    imageops::replace(&mut canvas, &scaled, x as i64, y as i64);
    canvas
}

/// Rasterize an SVG asset into an image of exactly `target` size.
pub fn rasterize_svg(name: &str, bytes: &[u8], target: Size) -> Result<RasterImage> {
    check_target(target)?;
    let source = decode_svg(name, bytes)?;
    log::debug!(
        "[RASTER] {}: intrinsic {}x{}, target {}x{}",
        name,
        source.width(),
        source.height(),
        target.width,
        target.height
    );
    Ok(RasterImage::new(fit_into(&source, target)))
}
