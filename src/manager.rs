//! Cursor state manager.
//!
//! The single entry point of the engine. Owns the current selection, the
//! overlay (created lazily, reused for the whole process), and both loops.
//!
//! State machine: `Inactive` (native pointer, no overlay) ⇄ `Active` (overlay
//! visible, native pointer suppressed). Every selection resets the previous
//! one before applying; a selection whose raster cannot be produced leaves
//! the current state untouched.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::model::{CursorSelection, HotSpot, Point, SelectionRequest, Size};
use crate::overlay::{OverlayFactory, OverlayState, OverlaySurface};
use crate::raster::{RasterImage, Rasterizer};
use crate::scheduler::Scheduler;
use crate::suppression::{NativePointerController, SuppressionEnforcer};
use crate::tracker::{PointerSource, PositionTracker};

/// Platform collaborators the manager is built from.
pub struct ManagerParts {
    pub rasterizer: Rasterizer,
    pub overlays: Box<dyn OverlayFactory>,
    pub pointer: Rc<dyn PointerSource>,
    pub native: Rc<dyn NativePointerController>,
    pub scheduler: Rc<dyn Scheduler>,
}

pub struct CursorManager {
    rasterizer: Rasterizer,
    overlays: Box<dyn OverlayFactory>,
    overlay: Option<Rc<RefCell<OverlaySurface>>>,
    pointer: Rc<dyn PointerSource>,
    tracker: PositionTracker,
    enforcer: SuppressionEnforcer,
    selection: CursorSelection,
    size: Option<Size>,
    hot_spot: HotSpot,
}

impl CursorManager {
    pub fn new(parts: ManagerParts) -> Self {
        let ManagerParts {
            rasterizer,
            overlays,
            pointer,
            native,
            scheduler,
        } = parts;
        Self {
            rasterizer,
            overlays,
            overlay: None,
            tracker: PositionTracker::new(scheduler.clone(), pointer.clone()),
            enforcer: SuppressionEnforcer::new(scheduler, native),
            pointer,
            selection: CursorSelection::None,
            size: None,
            hot_spot: Point::ZERO,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn is_active(&self) -> bool {
        !self.selection.is_none()
    }

    pub fn selection(&self) -> &CursorSelection {
        &self.selection
    }

    /// Size of the active cursor, `None` while inactive.
    pub fn current_size(&self) -> Option<Size> {
        self.size
    }

    pub fn hot_spot(&self) -> HotSpot {
        self.hot_spot
    }

    /// Snapshot of the overlay, `None` before the first selection.
    pub fn overlay_state(&self) -> Option<OverlayState> {
        self.overlay.as_ref().map(|o| o.borrow().state().clone())
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_running()
    }

    pub fn is_suppressing(&self) -> bool {
        self.enforcer.is_active()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_vector_icon(&mut self, name: &str, size: Size) -> Result<()> {
        self.select(&SelectionRequest::vector_icon(name, size))
    }

    pub fn select_emoji(&mut self, glyph: &str, size: Size) -> Result<()> {
        self.select(&SelectionRequest::emoji(glyph, size))
    }

    /// Apply a selection request.
    ///
    /// The raster is produced first. On failure nothing changes: the previous
    /// cursor (or the native pointer) stays. On success the previous cursor
    /// is reset and the new one applied. If the overlay then rejects the
    /// image, the error is returned and the manager stays inactive.
    pub fn select(&mut self, request: &SelectionRequest) -> Result<()> {
        log::info!(
            "[CURSOR] Selecting {:?} '{}' at {}x{}",
            request.kind,
            request.payload,
            request.size.width,
            request.size.height
        );
        let image = self.rasterizer.rasterize(request).map_err(|e| {
            log::error!("[CURSOR] Cannot rasterize '{}': {}", request.payload, e);
            e
        })?;

        if self.is_active() {
            self.reset();
        }
        self.apply(request, image)
    }

    /// Replay the current selection at a new size. No-op when inactive.
    pub fn reapply_current_selection(&mut self, size: Size) -> Result<()> {
        match self.selection.request(size) {
            Some(request) => self.select(&request),
            None => Ok(()),
        }
    }

    fn apply(&mut self, request: &SelectionRequest, image: RasterImage) -> Result<()> {
        let overlay = self.ensure_overlay()?;
        let hot_spot = request.hot_spot();
        {
            let mut surface = overlay.borrow_mut();
            // without the new image nothing would match the selection; stay inactive
            surface.set_image(image, hot_spot).map_err(|e| {
                log::error!("[CURSOR] Overlay image update failed: {}", e);
                e
            })?;
            match self.pointer.location() {
                Ok(location) => {
                    if let Err(e) = surface.set_origin(location) {
                        log::warn!("[CURSOR] Overlay placement failed: {}", e);
                    }
                }
                Err(e) => log::warn!("[CURSOR] Pointer unavailable: {}", e),
            }
            if let Err(e) = surface.set_visible(true) {
                log::warn!("[CURSOR] Showing overlay failed: {}", e);
            }
        }

        self.enforcer.activate();
        self.tracker.start(Rc::downgrade(&overlay));

        self.selection = request.selection();
        self.size = Some(request.size);
        self.hot_spot = hot_spot;
        log::info!("[CURSOR] Active: {:?}", self.selection);
        Ok(())
    }

    fn ensure_overlay(&mut self) -> Result<Rc<RefCell<OverlaySurface>>> {
        if let Some(overlay) = &self.overlay {
            return Ok(overlay.clone());
        }
        let backend = self.overlays.create().map_err(|e| {
            log::error!("[CURSOR] Cannot create overlay window: {}", e);
            e
        })?;
        log::debug!("[CURSOR] Overlay created");
        let overlay = Rc::new(RefCell::new(OverlaySurface::new(backend)));
        self.overlay = Some(overlay.clone());
        Ok(overlay)
    }

    // ========================================================================
    // Suppression / teardown
    // ========================================================================

    /// Re-issue the hide primitives now (for example after a space change).
    pub fn reassert_suppression(&self) {
        self.enforcer.reassert();
    }

    /// Return to the native pointer. Idempotent.
    pub fn reset(&mut self) {
        log::info!("[CURSOR] Resetting to default cursor");
        self.enforcer.deactivate();
        self.tracker.stop();
        if let Some(overlay) = &self.overlay {
            if let Err(e) = overlay.borrow_mut().set_visible(false) {
                log::warn!("[CURSOR] Hiding overlay failed: {}", e);
            }
        }
        self.selection = CursorSelection::None;
        self.size = None;
        self.hot_spot = Point::ZERO;
    }

    /// Reset and release the overlay window.
    pub fn shutdown(&mut self) {
        self.reset();
        if let Some(overlay) = self.overlay.take() {
            overlay.borrow_mut().dispose();
        }
    }
}

impl Drop for CursorManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CursorError;
    use crate::overlay::OverlayBackend;
    use crate::raster::{GlyphRenderer, MemoryAssetStore};
    use crate::scheduler::ManualScheduler;
    use image::{Rgba, RgbaImage};
    use std::cell::Cell;

    const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="blue"/></svg>"#;

    struct Fill;

    impl GlyphRenderer for Fill {
        fn render(&self, _text: &str, font_size: f64) -> Result<RgbaImage> {
            let edge = font_size.round() as u32;
            Ok(RgbaImage::from_pixel(edge, edge, Rgba([0, 0, 0, 255])))
        }
    }

    struct Still;

    impl PointerSource for Still {
        fn location(&self) -> Result<Point> {
            Ok(Point::new(200.0, 100.0))
        }
    }

    #[derive(Default)]
    struct Native {
        shows: Cell<u32>,
    }

    impl NativePointerController for Native {
        fn hide(&self) -> Result<()> {
            Ok(())
        }
        fn show(&self) -> Result<()> {
            self.shows.set(self.shows.get() + 1);
            Ok(())
        }
        fn authorize_background_suppression(&self) -> Result<()> {
            Ok(())
        }
    }

    struct Null;

    impl OverlayBackend for Null {
        fn set_content_size(&mut self, _size: Size) -> Result<()> {
            Ok(())
        }
        fn set_image(&mut self, _image: &RasterImage) -> Result<()> {
            Ok(())
        }
        fn set_frame_origin(&mut self, _origin: Point) -> Result<()> {
            Ok(())
        }
        fn set_visible(&mut self, _visible: bool) -> Result<()> {
            Ok(())
        }
        fn close(&mut self) {}
    }

    struct NullFactory(Rc<Cell<u32>>);

    impl OverlayFactory for NullFactory {
        fn create(&self) -> Result<Box<dyn OverlayBackend>> {
            self.0.set(self.0.get() + 1);
            Ok(Box::new(Null))
        }
    }

    fn manager() -> (CursorManager, Rc<Native>, Rc<Cell<u32>>) {
        let native = Rc::new(Native::default());
        let created = Rc::new(Cell::new(0));
        let assets = MemoryAssetStore::new().with("cursor-square", SQUARE_SVG);
        let mgr = CursorManager::new(ManagerParts {
            rasterizer: Rasterizer::new(Box::new(assets), Box::new(Fill)),
            overlays: Box::new(NullFactory(created.clone())),
            pointer: Rc::new(Still),
            native: native.clone(),
            scheduler: Rc::new(ManualScheduler::new()),
        });
        (mgr, native, created)
    }

    #[test]
    fn test_initial_state_is_inactive() {
        let (mgr, _, created) = manager();
        assert!(!mgr.is_active());
        assert_eq!(mgr.current_size(), None);
        assert!(mgr.overlay_state().is_none());
        assert_eq!(created.get(), 0);
    }

    #[test]
    fn test_select_activates_everything() {
        let (mut mgr, _, _) = manager();
        mgr.select_vector_icon("cursor-square", Size::square(32)).unwrap();

        assert!(mgr.is_active());
        assert!(mgr.is_tracking());
        assert!(mgr.is_suppressing());
        assert_eq!(mgr.current_size(), Some(Size::square(32)));
        let state = mgr.overlay_state().unwrap();
        assert!(state.visible);
        // placed immediately, before the first tick
        assert_eq!(state.origin, Some(Point::new(200.0, 100.0) - mgr.hot_spot()));
    }

    #[test]
    fn test_failed_select_keeps_previous_cursor() {
        let (mut mgr, native, _) = manager();
        mgr.select_emoji("★", Size::square(32)).unwrap();

        let err = mgr.select_vector_icon("cursor-missing", Size::square(32)).unwrap_err();
        assert!(matches!(err, CursorError::AssetNotFound { .. }));
        assert_eq!(mgr.selection(), &CursorSelection::Emoji("★".into()));
        assert!(mgr.is_suppressing());
        assert_eq!(native.shows.get(), 0);
    }

    #[test]
    fn test_reset_twice_matches_once() {
        let (mut mgr, _, _) = manager();
        mgr.select_emoji("★", Size::square(32)).unwrap();
        mgr.reset();
        let once = (mgr.selection().clone(), mgr.overlay_state(), mgr.hot_spot());
        mgr.reset();
        let twice = (mgr.selection().clone(), mgr.overlay_state(), mgr.hot_spot());
        assert_eq!(once, twice);
        assert!(!mgr.is_tracking());
    }

    #[test]
    fn test_drop_restores_native_pointer() {
        let (mut mgr, native, _) = manager();
        mgr.select_emoji("★", Size::square(32)).unwrap();
        drop(mgr);
        assert!(native.shows.get() >= 1);
    }
}
