//! Configuration constants and default values.
//!
//! Tick rates, overlay geometry, hot-spot ratios and NSUserDefaults keys.

use std::time::Duration;

// === Loop Rates ===

/// Position tracker period (120 Hz).
pub const POSITION_TICK: Duration = Duration::from_micros(8_333);

/// Suppression enforcer period (100 Hz).
pub const SUPPRESSION_TICK: Duration = Duration::from_millis(10);

/// Event dispatch period on the main loop (~60 Hz).
pub const DISPATCH_TICK: Duration = Duration::from_millis(16);

// === Overlay Geometry ===

/// The overlay window never shrinks below this edge length in points.
pub const MIN_OVERLAY_EDGE: u32 = 64;

// === Hot Spots ===

/// Horizontal hot-spot ratio for vector icons.
///
/// The icon artwork is rotated -45 degrees around its center, which moves the
/// tip from top-center to the left edge at mid height.
pub const VECTOR_HOTSPOT_X_RATIO: f64 = 0.15;

/// Vertical hot-spot ratio for vector icons.
pub const VECTOR_HOTSPOT_Y_RATIO: f64 = 0.5;

// === Glyph Rendering ===

/// Font size of an emoji glyph relative to the target square.
pub const GLYPH_FONT_SCALE: f64 = 0.8;

// === Defaults ===

/// Asset applied on startup.
pub const DEFAULT_ICON: &str = "cursor-banana";

/// Environment variable overriding the asset directory.
pub const ASSETS_DIR_ENV: &str = "MOUSE_FUN_ASSETS";

/// Subdirectory searched first by the directory asset store.
pub const ASSETS_SUBDIR: &str = "Resources";

/// File extension of vector icon assets.
pub const ASSET_EXTENSION: &str = "svg";

// === NSUserDefaults Keys ===

/// Key for the cursor size preference (points, stored as double).
pub const PREF_CURSOR_SIZE: &str = "cursorSize";
