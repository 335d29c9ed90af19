//! AppKit user interface: overlay window, status bar menu, emoji prompt.

pub mod emoji_prompt;
pub mod menu_target;
pub mod overlay;
pub mod status_bar;

pub use emoji_prompt::prompt_for_emoji;
pub use menu_target::create_menu_target;
pub use overlay::{MacOverlayFactory, MacOverlayWindow};
pub use status_bar::StatusBar;
