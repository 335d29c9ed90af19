//! Tests for the image rasterizer against in-memory assets.

mod support;

use mouse_fun::model::SelectionKind;
use mouse_fun::raster::Rasterizer;
use mouse_fun::{CursorError, CursorSize, SelectionRequest, Size};
use support::{assets, opaque_bounds, SquareGlyphs};

fn rasterizer() -> Rasterizer {
    Rasterizer::new(Box::new(assets()), Box::new(SquareGlyphs))
}

// === Output Size Tests ===

#[test]
fn output_matches_target_size() {
    let r = rasterizer();
    for size in CursorSize::ALL {
        for request in [
            SelectionRequest::vector_icon("cursor-wide", size.size()),
            SelectionRequest::vector_icon("cursor-square", size.size()),
            SelectionRequest::emoji("🍌", size.size()),
        ] {
            let image = r.rasterize(&request).unwrap();
            assert_eq!(image.size(), size.size(), "{:?}", request);
        }
    }
}

#[test]
fn non_square_target_is_honored() {
    let image = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-square", Size::new(40, 20)))
        .unwrap();
    assert_eq!(image.size(), Size::new(40, 20));
    // 20x20 square centered horizontally
    assert_eq!(opaque_bounds(&image, 0), Some((10, 0, 30, 20)));
}

#[test]
fn zero_target_is_rejected() {
    let err = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-square", Size::new(0, 32)))
        .unwrap_err();
    assert_eq!(
        err,
        CursorError::InvalidSize {
            width: 0,
            height: 32
        }
    );
}

// === Aspect Ratio Tests ===

#[test]
fn wide_icon_is_letterboxed() {
    let image = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-wide", Size::square(32)))
        .unwrap();

    assert_eq!(opaque_bounds(&image, 0), Some((0, 8, 32, 24)));
    for x in 0..32 {
        for y in (0..8).chain(24..32) {
            assert_eq!(image.alpha_at(x, y), 0, "band pixel ({x}, {y})");
        }
    }
    assert!(image.alpha_at(16, 16) >= 250);
}

#[test]
fn aspect_ratio_is_preserved() {
    let image = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-wide", Size::square(48)))
        .unwrap();
    let (x0, y0, x1, y1) = opaque_bounds(&image, 0).unwrap();
    let ratio = (x1 - x0) as f64 / (y1 - y0) as f64;
    assert!((ratio - 2.0).abs() < 0.1, "ratio {}", ratio);
}

#[test]
fn square_icon_fills_target() {
    let image = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-square", Size::square(24)))
        .unwrap();
    assert_eq!(opaque_bounds(&image, 0), Some((0, 0, 24, 24)));
}

// === Hot Spot Tests ===

#[test]
fn hot_spots_stay_inside_image() {
    for size in CursorSize::ALL {
        for kind in [SelectionKind::VectorIcon, SelectionKind::Emoji] {
            let hs = kind.hot_spot(size.size());
            let edge = size.points() as f64;
            assert!(hs.x >= 0.0 && hs.x <= edge, "{:?} {:?}", kind, size);
            assert!(hs.y >= 0.0 && hs.y <= edge, "{:?} {:?}", kind, size);
        }
    }
}

// === Error Tests ===

#[test]
fn unknown_asset_is_not_found() {
    let err = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-nope", Size::square(32)))
        .unwrap_err();
    assert_eq!(
        err,
        CursorError::AssetNotFound {
            name: "cursor-nope".into()
        }
    );
}

#[test]
fn malformed_asset_is_decode_error() {
    let err = rasterizer()
        .rasterize(&SelectionRequest::vector_icon("cursor-broken", Size::square(32)))
        .unwrap_err();
    assert!(matches!(err, CursorError::AssetDecodeError { .. }));
}
