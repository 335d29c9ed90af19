//! Fake platform collaborators shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use image::{Rgba, RgbaImage};

use mouse_fun::raster::{MemoryAssetStore, Rasterizer};
use mouse_fun::{
    CursorError, CursorManager, GlyphRenderer, ManagerParts, ManualScheduler, NativePointerController,
    OverlayBackend, OverlayFactory, Point, PointerSource, RasterImage, Result, Size,
};

/// 20x10 solid red rectangle.
pub const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10"><rect width="20" height="10" fill="#ff0000"/></svg>"##;

/// 16x16 solid blue square.
pub const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><rect width="16" height="16" fill="#0000ff"/></svg>"##;

pub fn assets() -> MemoryAssetStore {
    MemoryAssetStore::new()
        .with("cursor-wide", WIDE_SVG)
        .with("cursor-square", SQUARE_SVG)
        .with("cursor-broken", "<svg")
}

/// Renders every glyph as an opaque square with edge `round(font_size)`.
pub struct SquareGlyphs;

impl GlyphRenderer for SquareGlyphs {
    fn render(&self, _text: &str, font_size: f64) -> Result<RgbaImage> {
        let edge = font_size.round().max(1.0) as u32;
        Ok(RgbaImage::from_pixel(edge, edge, Rgba([255, 200, 0, 255])))
    }
}

pub struct FakePointer {
    pub location: Cell<Point>,
}

impl PointerSource for FakePointer {
    fn location(&self) -> Result<Point> {
        Ok(self.location.get())
    }
}

/// Native pointer with hide/show counters and a visibility flag.
pub struct FakeNative {
    pub hides: Cell<u32>,
    pub shows: Cell<u32>,
    pub auths: Cell<u32>,
    pub visible: Cell<bool>,
}

impl Default for FakeNative {
    fn default() -> Self {
        Self {
            hides: Cell::new(0),
            shows: Cell::new(0),
            auths: Cell::new(0),
            visible: Cell::new(true),
        }
    }
}

impl NativePointerController for FakeNative {
    fn hide(&self) -> Result<()> {
        self.hides.set(self.hides.get() + 1);
        self.visible.set(false);
        Ok(())
    }

    fn show(&self) -> Result<()> {
        self.shows.set(self.shows.get() + 1);
        self.visible.set(true);
        Ok(())
    }

    fn authorize_background_suppression(&self) -> Result<()> {
        self.auths.set(self.auths.get() + 1);
        Ok(())
    }
}

/// Window calls, in order, across every overlay the factory created.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    Resize(Size),
    Image(Size),
    Move(Point),
    Visible(bool),
    Close,
}

struct FakeWindow {
    calls: Rc<RefCell<Vec<WindowCall>>>,
    reject_image: Rc<Cell<Option<Size>>>,
}

impl OverlayBackend for FakeWindow {
    fn set_content_size(&mut self, size: Size) -> Result<()> {
        self.calls.borrow_mut().push(WindowCall::Resize(size));
        Ok(())
    }

    fn set_image(&mut self, image: &RasterImage) -> Result<()> {
        if self.reject_image.get() == Some(image.size()) {
            return Err(CursorError::PlatformCallFailed {
                call: "setImage",
                code: -1,
            });
        }
        self.calls.borrow_mut().push(WindowCall::Image(image.size()));
        Ok(())
    }

    fn set_frame_origin(&mut self, origin: Point) -> Result<()> {
        self.calls.borrow_mut().push(WindowCall::Move(origin));
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.calls.borrow_mut().push(WindowCall::Visible(visible));
        Ok(())
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(WindowCall::Close);
    }
}

pub struct FakeWindows {
    pub created: Rc<Cell<u32>>,
    pub calls: Rc<RefCell<Vec<WindowCall>>>,
    /// Image size whose upload fails.
    pub reject_image: Rc<Cell<Option<Size>>>,
}

impl OverlayFactory for FakeWindows {
    fn create(&self) -> Result<Box<dyn OverlayBackend>> {
        self.created.set(self.created.get() + 1);
        Ok(Box::new(FakeWindow {
            calls: self.calls.clone(),
            reject_image: self.reject_image.clone(),
        }))
    }
}

/// A manager wired to fakes, plus handles to inspect them.
pub struct Harness {
    pub manager: CursorManager,
    pub scheduler: Rc<ManualScheduler>,
    pub pointer: Rc<FakePointer>,
    pub native: Rc<FakeNative>,
    pub windows_created: Rc<Cell<u32>>,
    pub window_calls: Rc<RefCell<Vec<WindowCall>>>,
    pub reject_image: Rc<Cell<Option<Size>>>,
}

impl Harness {
    pub fn new() -> Self {
        let scheduler = Rc::new(ManualScheduler::new());
        let pointer = Rc::new(FakePointer {
            location: Cell::new(Point::new(400.0, 300.0)),
        });
        let native = Rc::new(FakeNative::default());
        let windows_created = Rc::new(Cell::new(0));
        let window_calls = Rc::new(RefCell::new(Vec::new()));
        let reject_image = Rc::new(Cell::new(None));

        let manager = CursorManager::new(ManagerParts {
            rasterizer: Rasterizer::new(Box::new(assets()), Box::new(SquareGlyphs)),
            overlays: Box::new(FakeWindows {
                created: windows_created.clone(),
                calls: window_calls.clone(),
                reject_image: reject_image.clone(),
            }),
            pointer: pointer.clone(),
            native: native.clone(),
            scheduler: scheduler.clone(),
        });

        Self {
            manager,
            scheduler,
            pointer,
            native,
            windows_created,
            window_calls,
            reject_image,
        }
    }

    /// Image currently held by the overlay.
    pub fn overlay_image(&self) -> Option<RasterImage> {
        self.manager.overlay_state().and_then(|s| s.image)
    }
}

/// Alpha-weighted centroid of an image.
pub fn alpha_centroid(image: &RasterImage) -> (f64, f64) {
    let (mut sx, mut sy, mut total) = (0.0, 0.0, 0.0);
    for (x, y, p) in image.pixels().enumerate_pixels() {
        let a = p.0[3] as f64;
        sx += a * (x as f64 + 0.5);
        sy += a * (y as f64 + 0.5);
        total += a;
    }
    (sx / total, sy / total)
}

/// Bounding box (x0, y0, x1, y1), exclusive, of pixels with alpha above `min_alpha`.
pub fn opaque_bounds(image: &RasterImage, min_alpha: u8) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in image.pixels().enumerate_pixels() {
        if p.0[3] > min_alpha {
            bounds = Some(match bounds {
                None => (x, y, x + 1, y + 1),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
            });
        }
    }
    bounds
}
