//! Application domain model.
//!
//! Pure types with no FFI: geometry, the cursor selection and hot-spot rules,
//! the menu catalog, and configuration constants.

pub mod constants;
pub mod geometry;
pub mod selection;
pub mod style;

pub use constants::*;
pub use geometry::{aspect_fit, Fit, Point, Size};
pub use selection::{CursorSelection, HotSpot, SelectionKind, SelectionRequest};
pub use style::{CursorSize, CursorStyle};
