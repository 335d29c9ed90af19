//! The active cursor selection and its hot spot.

use super::constants::{VECTOR_HOTSPOT_X_RATIO, VECTOR_HOTSPOT_Y_RATIO};
use super::geometry::{Point, Size};

/// Pixel of the cursor image that sits on the true pointer location.
///
/// Same space as the raster: origin top-left, y down.
pub type HotSpot = Point;

/// Which custom cursor is active. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CursorSelection {
    /// Native pointer, no overlay.
    #[default]
    None,
    /// Vector icon looked up by asset name.
    VectorIcon(String),
    /// Short text glyph, typically a single emoji.
    Emoji(String),
}

impl CursorSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, CursorSelection::None)
    }

    /// Kind of the selection, `None` for the native pointer.
    pub fn kind(&self) -> Option<SelectionKind> {
        match self {
            CursorSelection::None => None,
            CursorSelection::VectorIcon(_) => Some(SelectionKind::VectorIcon),
            CursorSelection::Emoji(_) => Some(SelectionKind::Emoji),
        }
    }

    /// Rebuild the request that produced this selection at a new size.
    pub fn request(&self, size: Size) -> Option<SelectionRequest> {
        match self {
            CursorSelection::None => None,
            CursorSelection::VectorIcon(name) => Some(SelectionRequest::vector_icon(name, size)),
            CursorSelection::Emoji(glyph) => Some(SelectionRequest::emoji(glyph, size)),
        }
    }
}

/// Source kind of a custom cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    VectorIcon,
    Emoji,
}

impl SelectionKind {
    /// Hot spot for an image of this kind at `size`, always inside the image.
    ///
    /// Vector icons carry a -45 degree rotation in their artwork, so their tip
    /// sits on the left edge at mid height. Emoji use the geometric center.
    pub fn hot_spot(self, size: Size) -> HotSpot {
        let w = size.width as f64;
        let h = size.height as f64;
        let (x, y) = match self {
            SelectionKind::VectorIcon => (w * VECTOR_HOTSPOT_X_RATIO, h * VECTOR_HOTSPOT_Y_RATIO),
            SelectionKind::Emoji => (w / 2.0, h / 2.0),
        };
        Point::new(x.clamp(0.0, w), y.clamp(0.0, h))
    }
}

/// A request from the command surface: `{kind, payload, size}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub kind: SelectionKind,
    /// Asset name for vector icons, text for emoji.
    pub payload: String,
    pub size: Size,
}

impl SelectionRequest {
    pub fn vector_icon(name: &str, size: Size) -> Self {
        Self {
            kind: SelectionKind::VectorIcon,
            payload: name.to_string(),
            size,
        }
    }

    pub fn emoji(glyph: &str, size: Size) -> Self {
        Self {
            kind: SelectionKind::Emoji,
            payload: glyph.to_string(),
            size,
        }
    }

    /// The selection this request installs once applied.
    pub fn selection(&self) -> CursorSelection {
        match self.kind {
            SelectionKind::VectorIcon => CursorSelection::VectorIcon(self.payload.clone()),
            SelectionKind::Emoji => CursorSelection::Emoji(self.payload.clone()),
        }
    }

    pub fn hot_spot(&self) -> HotSpot {
        self.kind.hot_spot(self.size)
    }
}
