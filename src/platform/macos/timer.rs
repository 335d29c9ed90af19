//! `NSTimer`-backed scheduler.
//!
//! Timers are added to the main run loop in the common modes so they keep
//! firing while a menu is tracking or a modal alert is up.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use super::ffi::bridge::{get_class, id, msg_send, nil, ns_id, nsstring, RcBlock, YES};
use crate::scheduler::{Scheduler, Tick, TimerId};

/// Same string as `NSRunLoopCommonModes`.
const COMMON_MODES: &str = "kCFRunLoopCommonModes";

#[derive(Default)]
pub struct RunLoopScheduler {
    timers: RefCell<HashMap<TimerId, id>>,
    next_id: Cell<u64>,
}

impl RunLoopScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for RunLoopScheduler {
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let tick = RefCell::new(tick);
        let block = RcBlock::new(move |_timer: id| {
            // A tick that spins the run loop (a modal alert) must not re-enter itself.
            if let Ok(mut f) = tick.try_borrow_mut() {
                f();
            }
        });

        unsafe {
            let timer: id = msg_send![
                get_class("NSTimer"),
                timerWithTimeInterval: period.as_secs_f64(),
                repeats: YES,
                block: &*block
            ];
            let _: id = msg_send![timer, retain];
            let run_loop: id = msg_send![get_class("NSRunLoop"), mainRunLoop];
            let mode = nsstring(COMMON_MODES);
            let _: () = msg_send![run_loop, addTimer: timer, forMode: ns_id(&mode)];
            self.timers.borrow_mut().insert(id, timer);
        }
        id
    }

    fn cancel(&self, id: TimerId) {
        let Some(timer) = self.timers.borrow_mut().remove(&id) else {
            return;
        };
        if timer != nil {
            unsafe {
                let _: () = msg_send![timer, invalidate];
                let _: () = msg_send![timer, release];
            }
        }
    }
}

impl Drop for RunLoopScheduler {
    fn drop(&mut self) {
        let ids: Vec<TimerId> = self.timers.borrow().keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
    }
}
