//! Raw FFI declarations and the objc2 shim.

pub mod bridge;
pub mod cocoa_utils;
pub mod coregraphics;
pub mod coretext;

pub use cocoa_utils::*;
pub use coregraphics::*;
