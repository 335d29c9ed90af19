//! Error types for the cursor engine.
//!
//! Nothing here is fatal. Asset errors abort a single selection and leave
//! the previous cursor in place; platform errors are logged by the loop
//! that hit them and retried on the next tick.

use thiserror::Error;

/// Main error type for cursor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The asset store has no vector icon with this name.
    #[error("Asset not found: {name}")]
    AssetNotFound { name: String },

    /// The vector icon exists but could not be decoded.
    #[error("Failed to decode asset {name}: {reason}")]
    AssetDecodeError { name: String, reason: String },

    /// Target size was zero in at least one dimension.
    #[error("Invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// The text facility could not produce a glyph image.
    #[error("Glyph rendering failed: {0}")]
    GlyphRenderFailed(String),

    /// A native pointer or window primitive returned an error code.
    #[error("Platform call {call} failed with code {code}")]
    PlatformCallFailed { call: &'static str, code: i32 },
}

impl CursorError {
    /// Returns true for errors raised while resolving or decoding assets.
    pub fn is_asset_error(&self) -> bool {
        matches!(
            self,
            CursorError::AssetNotFound { .. } | CursorError::AssetDecodeError { .. }
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CursorError>;
