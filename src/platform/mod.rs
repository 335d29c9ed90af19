//! Platform-specific implementations.
//!
//! Only macOS is supported. Other hosts build the engine library (and its
//! tests) without a backend.

#[cfg(target_os = "macos")]
pub mod macos;
