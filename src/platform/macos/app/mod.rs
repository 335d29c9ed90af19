//! Application setup helpers.

pub mod helpers;

pub use helpers::{assets_root, set_accessory_policy};
