//! Overlay surface.
//!
//! A borderless, transparent, click-through window pinned above everything
//! (dock and menu bar included) that shows one raster image. The platform
//! window sits behind [`OverlayBackend`]; [`OverlaySurface`] owns the image,
//! the hot spot and the placement math.

pub mod state;

use crate::error::Result;
use crate::model::{HotSpot, Point, Size, MIN_OVERLAY_EDGE};
use crate::raster::RasterImage;

pub use state::OverlayState;

/// Platform window primitives used by the overlay.
///
/// Coordinates are global, top-left origin, y down.
pub trait OverlayBackend {
    /// Resize the window and its content view.
    fn set_content_size(&mut self, size: Size) -> Result<()>;

    /// Replace the drawn image and schedule a redraw: clear to transparent,
    /// then blit `image` at (0, 0).
    fn set_image(&mut self, image: &RasterImage) -> Result<()>;

    /// Move the window's top-left corner.
    fn set_frame_origin(&mut self, origin: Point) -> Result<()>;

    /// Order the window front or out without destroying it.
    fn set_visible(&mut self, visible: bool) -> Result<()>;

    /// Release the window. Called at most once.
    fn close(&mut self);
}

/// Creates platform overlay windows.
pub trait OverlayFactory {
    fn create(&self) -> Result<Box<dyn OverlayBackend>>;
}

/// The cursor overlay: image + hot spot at a screen position.
pub struct OverlaySurface {
    backend: Option<Box<dyn OverlayBackend>>,
    state: OverlayState,
    /// Last pointer target, replayed when the image or hot spot changes.
    target: Option<Point>,
}

impl OverlaySurface {
    pub fn new(backend: Box<dyn OverlayBackend>) -> Self {
        Self {
            backend: Some(backend),
            state: OverlayState::default(),
            target: None,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn hot_spot(&self) -> HotSpot {
        self.state.hot_spot
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.backend.is_none()
    }

    /// Frame size for an image: never smaller than the minimum edge.
    pub fn frame_size_for(image: Size) -> Size {
        image.max(Size::square(MIN_OVERLAY_EDGE))
    }

    /// Install a new image and hot spot together, resize, and redraw.
    ///
    /// Image and hot spot are swapped in one step, so no placement ever pairs
    /// the old image with the new hot spot.
    pub fn set_image(&mut self, image: RasterImage, hot_spot: HotSpot) -> Result<()> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        let frame = Self::frame_size_for(image.size());
        backend.set_content_size(frame)?;
        backend.set_image(&image)?;

        self.state.frame_size = frame;
        self.state.image = Some(image);
        self.state.hot_spot = hot_spot;
        self.state.origin = None;

        if let Some(target) = self.target {
            self.set_origin(target)?;
        }
        Ok(())
    }

    /// Place the overlay so its hot spot lands on `target`:
    /// `origin = target - hot_spot`.
    pub fn set_origin(&mut self, target: Point) -> Result<()> {
        self.target = Some(target);
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        let origin = target - self.state.hot_spot;
        if self.state.origin == Some(origin) {
            return Ok(());
        }
        backend.set_frame_origin(origin)?;
        self.state.origin = Some(origin);
        Ok(())
    }

    /// Show or hide. Backing resources stay alive.
    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        if self.state.visible == visible {
            return Ok(());
        }
        backend.set_visible(visible)?;
        self.state.visible = visible;
        Ok(())
    }

    /// Release the platform window. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            if self.state.visible {
                if let Err(e) = backend.set_visible(false) {
                    log::warn!("[OVERLAY] Hide before close failed: {}", e);
                }
            }
            backend.close();
            log::debug!("[OVERLAY] Disposed");
        }
        self.state.visible = false;
    }
}

impl Drop for OverlaySurface {
    fn drop(&mut self) {
        self.dispose();
    }
}
