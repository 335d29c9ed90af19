//! Overlay window and cursor view.

pub mod view;
pub mod window;

pub use window::{MacOverlayFactory, MacOverlayWindow};
