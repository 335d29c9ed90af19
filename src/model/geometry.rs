//! Screen and image geometry.
//!
//! All coordinates use a top-left origin with y growing downwards. The
//! macOS backend converts to and from Cocoa's bottom-left space at the edge.

use std::ops::{Add, Sub};

/// A point in screen or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer pixel size of a raster or a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square size with the given edge.
    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// Placement of a scaled source inside a target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Aspect-fit `src` (width, height) inside `target`, centered.
///
/// Uses a single uniform scale `min(tw / sw, th / sh)` so the source ratio is
/// preserved and the result touches the target on at least one axis.
pub fn aspect_fit(src_width: f64, src_height: f64, target: Size) -> Fit {
    let tw = target.width as f64;
    let th = target.height as f64;
    let scale = (tw / src_width).min(th / src_height);
    let width = src_width * scale;
    let height = src_height * scale;
    Fit {
        scale,
        x: (tw - width) / 2.0,
        y: (th - height) / 2.0,
        width,
        height,
    }
}
