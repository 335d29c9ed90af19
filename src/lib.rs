#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Cursor substitution engine.
//!
//! Everything outside `platform` is plain Rust with no FFI, so the engine
//! (rasterizer, overlay state, tracking and suppression loops, state manager)
//! runs under `cargo test` on any host with fake platform collaborators.
//! The macOS backend lives in [`platform::macos`].

pub mod error;
pub mod events;
pub mod handlers;
pub mod manager;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod preferences;
pub mod raster;
pub mod scheduler;
pub mod suppression;
pub mod tracker;

pub use error::{CursorError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use manager::{CursorManager, ManagerParts};
pub use model::{CursorSelection, CursorSize, CursorStyle, HotSpot, Point, SelectionRequest, Size};
pub use overlay::{OverlayBackend, OverlayFactory, OverlaySurface};
pub use raster::{AssetStore, GlyphRenderer, RasterImage};
pub use scheduler::{ManualScheduler, RepeatingTask, Scheduler, TimerId};
pub use suppression::{HideLatch, NativePointerController, SuppressionEnforcer};
pub use tracker::{PointerSource, PositionTracker};
