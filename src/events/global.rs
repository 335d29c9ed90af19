//! Global access to the application event bus.
//!
//! Objective-C action methods have no Rust context to hang a publisher on, so
//! they publish through this static. `init_event_bus()` runs once in `main`;
//! calling it again is a no-op.
//!
//! ```ignore
//! events::init_event_bus();
//! events::publish(AppEvent::Reset);
//! for event in events::drain_events() { /* ... */ }
//! ```

use std::sync::{Mutex, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

struct GlobalBus {
    publisher: EventPublisher,
    bus: Mutex<EventBus>,
}

static BUS: OnceLock<GlobalBus> = OnceLock::new();

fn global() -> &'static GlobalBus {
    BUS.get_or_init(|| {
        let bus = EventBus::new();
        GlobalBus {
            publisher: bus.publisher(),
            bus: Mutex::new(bus),
        }
    })
}

/// Initialize the global event bus.
pub fn init_event_bus() {
    let _ = global();
}

/// Get a publisher handle for the global event bus.
pub fn publisher() -> EventPublisher {
    global().publisher.clone()
}

/// Publish an event to the global event bus.
pub fn publish(event: AppEvent) {
    log::debug!("[EVENTS] {}", event.description());
    global().publisher.publish(event);
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    match global().bus.lock() {
        Ok(bus) => bus.drain(),
        Err(poisoned) => poisoned.into_inner().drain(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global bus is shared by every test in this process, so only one
    // test touches it.
    #[test]
    fn test_global_round_trip() {
        init_event_bus();
        init_event_bus();
        publish(AppEvent::Reset);
        publisher().publish(AppEvent::Quit);

        let events = drain_events();
        assert!(events.contains(&AppEvent::Reset));
        assert!(events.contains(&AppEvent::Quit));
    }
}
