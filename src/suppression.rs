//! Suppression enforcer.
//!
//! Keeps the native pointer hidden while a custom cursor is active. The OS
//! (or other applications) may re-show the native pointer at any time, so the
//! hide primitives are re-issued unconditionally at ~100 Hz. When inactive the
//! loop still ticks but does nothing.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::Result;
use crate::model::SUPPRESSION_TICK;
use crate::scheduler::{RepeatingTask, Scheduler};

/// Native pointer visibility primitives.
///
/// On macOS each call covers both the process-local and the display-level
/// primitive.
pub trait NativePointerController {
    fn hide(&self) -> Result<()>;

    fn show(&self) -> Result<()>;

    /// Allow the process to change pointer visibility while in the background.
    fn authorize_background_suppression(&self) -> Result<()>;
}

/// Shared "suppression active" flag read by the enforcer loop.
#[derive(Debug, Clone, Default)]
pub struct SuppressionState(Rc<Cell<bool>>);

impl SuppressionState {
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    fn set(&self, active: bool) {
        self.0.set(active);
    }
}

pub struct SuppressionEnforcer {
    state: SuppressionState,
    native: Rc<dyn NativePointerController>,
    task: RepeatingTask,
}

impl SuppressionEnforcer {
    pub fn new(scheduler: Rc<dyn Scheduler>, native: Rc<dyn NativePointerController>) -> Self {
        Self {
            state: SuppressionState::default(),
            native,
            task: RepeatingTask::new("suppression", SUPPRESSION_TICK, scheduler),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    pub fn state(&self) -> SuppressionState {
        self.state.clone()
    }

    /// Authorize background suppression, hide immediately, and start the loop.
    pub fn activate(&mut self) {
        if let Err(e) = self.native.authorize_background_suppression() {
            log::warn!("[SUPPRESS] Background authorization failed: {}", e);
        }
        self.state.set(true);
        hide_logged(self.native.as_ref());

        let native = self.native.clone();
        let state = self.state.clone();
        let failures = Cell::new(0u32);
        self.task.ensure_running(move || {
            if !state.is_active() {
                return;
            }
            match native.hide() {
                Ok(()) => failures.set(0),
                Err(_) => {
                    let n = failures.get().saturating_add(1);
                    failures.set(n);
                    hide_failed(n);
                }
            }
        });
        log::debug!("[SUPPRESS] Active");
    }

    /// Stop enforcing and restore the native pointer. Issues exactly one show.
    pub fn deactivate(&mut self) {
        self.state.set(false);
        self.task.stop();
        if let Err(e) = self.native.show() {
            log::warn!("[SUPPRESS] Restoring native pointer failed: {}", e);
        }
        log::debug!("[SUPPRESS] Inactive");
    }

    /// Re-issue the hide primitives now, outside the loop.
    pub fn reassert(&self) {
        if self.state.is_active() {
            hide_logged(self.native.as_ref());
        }
    }
}

/// Our share of one counted OS hide primitive, held at depth 0 or 1.
///
/// `+[NSCursor hide]` and `CGDisplayHideCursor` each bump a per-process
/// counter that needs a matching show. Re-asserting a hide first undoes the
/// previous one, so restoring always takes at most one show call.
#[derive(Debug, Default)]
pub struct HideLatch {
    hidden: Cell<bool>,
}

impl HideLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while one of our hides is outstanding.
    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    /// Issue `hide`, undoing our previous hide with `unhide` first.
    ///
    /// The latch is set only when `hide` succeeds. If `unhide` fails the
    /// previous hide is still outstanding and `hide` is not issued.
    pub fn hide(
        &self,
        unhide: impl FnOnce() -> Result<()>,
        hide: impl FnOnce() -> Result<()>,
    ) -> Result<()> {
        if self.hidden.get() {
            unhide()?;
            self.hidden.set(false);
        }
        hide()?;
        self.hidden.set(true);
        Ok(())
    }

    /// Undo our outstanding hide, if any, with a single `show`.
    pub fn show(&self, show: impl FnOnce() -> Result<()>) -> Result<()> {
        if !self.hidden.get() {
            return Ok(());
        }
        show()?;
        self.hidden.set(false);
        Ok(())
    }
}

fn hide_logged(native: &dyn NativePointerController) {
    if let Err(e) = native.hide() {
        log::warn!("[SUPPRESS] Hide failed: {}", e);
    }
}

// First failure, then once per second of continuous failure.
fn hide_failed(consecutive: u32) {
    if consecutive == 1 || consecutive % 100 == 0 {
        log::warn!("[SUPPRESS] Hide failed ({} in a row)", consecutive);
    }
}
