//! macOS implementation using AppKit via objc2.
//!
//! - `ffi`: objc2 shim, CoreGraphics/CoreText declarations, private `CGS*` calls
//! - `pointer`: pointer location and native visibility (`MacPointer`)
//! - `timer`: `NSTimer` scheduler in the common run-loop modes
//! - `glyph`: CoreText emoji renderer
//! - `ui`: overlay window, status bar menu, emoji prompt
//! - `input`: termination and workspace observers
//! - `storage`: NSUserDefaults preferences
//! - `handlers`: main-loop event dispatch

pub mod app;
pub mod ffi;
pub mod glyph;
pub mod handlers;
pub mod input;
pub mod pointer;
pub mod storage;
pub mod timer;
pub mod ui;

pub use ffi::bridge;
pub use glyph::CoreTextGlyphRenderer;
pub use handlers::AppShell;
pub use pointer::MacPointer;
pub use storage::UserDefaultsPreferences;
pub use timer::RunLoopScheduler;
pub use ui::{MacOverlayFactory, StatusBar};
