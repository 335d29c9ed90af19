//! Repeating timers on the owning event loop.
//!
//! Both cursor loops run as repeating callbacks on the single UI loop, so
//! ticks interleave but never overlap. The platform provides a [`Scheduler`]
//! (an `NSTimer` in the common run-loop modes on macOS); tests and headless
//! hosts use [`ManualScheduler`], which fires ticks on explicit `advance`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Identifies a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Callback fired on every period.
pub type Tick = Box<dyn FnMut()>;

/// Repeating timer facility of the owning loop.
pub trait Scheduler {
    /// Start calling `tick` every `period` until cancelled.
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> TimerId;

    /// Stop a timer. No tick fires after this returns. Unknown ids are ignored.
    fn cancel(&self, id: TimerId);
}

/// A named repeating task that can be started and stopped any number of times.
///
/// `stop` is idempotent and also runs on drop, so a task never outlives its
/// owner.
pub struct RepeatingTask {
    name: &'static str,
    period: Duration,
    scheduler: Rc<dyn Scheduler>,
    timer: Option<TimerId>,
}

impl RepeatingTask {
    pub fn new(name: &'static str, period: Duration, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            name,
            period,
            scheduler,
            timer: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule `tick` unless already running. Returns true if it was started.
    pub fn ensure_running(&mut self, tick: impl FnMut() + 'static) -> bool {
        if self.timer.is_some() {
            return false;
        }
        let id = self.scheduler.schedule_repeating(self.period, Box::new(tick));
        log::debug!("[TIMER] {} started ({:?})", self.name, self.period);
        self.timer = Some(id);
        true
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
            log::debug!("[TIMER] {} stopped", self.name);
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.stop();
    }
}

struct ManualTimer {
    id: TimerId,
    period: Duration,
    next_due: Duration,
    tick: Rc<RefCell<Tick>>,
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Timers fire in due order when the clock is advanced. A tick may schedule
/// or cancel timers, including its own.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<ManualTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of live timers.
    pub fn active_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Advance the clock by `by`, firing every tick that falls due.
    /// Returns the number of ticks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut fired = 0;
        loop {
            let due = {
                let mut timers = self.timers.borrow_mut();
                let next = timers
                    .iter_mut()
                    .filter(|t| t.next_due <= target)
                    .min_by_key(|t| (t.next_due, t.id.0));
                next.map(|t| {
                    let due = t.next_due;
                    t.next_due += t.period;
                    (due, t.tick.clone())
                })
            };
            let Some((due, tick)) = due else { break };
            self.now.set(due);
            // A tick cannot re-enter itself; skip if it is somehow still running.
            let running = tick.try_borrow_mut();
            if let Ok(mut f) = running {
                f();
                fired += 1;
            }
        }
        self.now.set(target);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, period: Duration, tick: Tick) -> TimerId {
        let period = period.max(Duration::from_micros(1));
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers.borrow_mut().push(ManualTimer {
            id,
            period,
            next_due: self.now.get() + period,
            tick: Rc::new(RefCell::new(tick)),
        });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != id);
    }
}
