#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! mouse-fun: replace the macOS pointer with a playful icon or emoji.

#[cfg(target_os = "macos")]
mod macos_main;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize event bus before any UI code runs
    mouse_fun::events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        log::error!("mouse-fun only runs on macOS");
        std::process::exit(1);
    }
}
