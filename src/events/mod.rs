//! Event system for decoupled inter-module communication.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Menu Bar   │     │ Emoji Prompt│     │  Workspace  │
//! │  (NSMenu)   │     │  (NSAlert)  │     │  Observers  │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │              (main loop, 60fps timer)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: `AppEvent`
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access for Objective-C callbacks

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
