//! Position tracker.
//!
//! Samples the global pointer location at ~120 Hz and keeps the overlay's hot
//! spot on it. The tracker holds a weak reference to the overlay, so a tick
//! with no overlay (or one being mutated by the manager) does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::model::{Point, POSITION_TICK};
use crate::overlay::OverlaySurface;
use crate::scheduler::{RepeatingTask, Scheduler};

/// Global pointer location, top-left origin, y down.
pub trait PointerSource {
    fn location(&self) -> Result<Point>;
}

pub struct PositionTracker {
    task: RepeatingTask,
    pointer: Rc<dyn PointerSource>,
}

impl PositionTracker {
    pub fn new(scheduler: Rc<dyn Scheduler>, pointer: Rc<dyn PointerSource>) -> Self {
        Self {
            task: RepeatingTask::new("position", POSITION_TICK, scheduler),
            pointer,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    /// Start following the pointer with `overlay`. No-op if already running.
    pub fn start(&mut self, overlay: Weak<RefCell<OverlaySurface>>) -> bool {
        let pointer = self.pointer.clone();
        self.task.ensure_running(move || track_once(pointer.as_ref(), &overlay))
    }

    pub fn stop(&mut self) {
        self.task.stop();
    }
}

/// One tracking step: read the pointer and place the overlay.
pub fn track_once(pointer: &dyn PointerSource, overlay: &Weak<RefCell<OverlaySurface>>) {
    let Some(overlay) = overlay.upgrade() else {
        return;
    };
    let Ok(mut overlay) = overlay.try_borrow_mut() else {
        return;
    };
    let location = match pointer.location() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[TRACK] Pointer unavailable: {}", e);
            return;
        }
    };
    // Placement failures are retried by the next tick.
    if let Err(e) = overlay.set_origin(location) {
        log::warn!("[TRACK] Placement failed: {}", e);
    }
}
