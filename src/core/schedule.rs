//! Delayed task scheduling.
//!
//! Every timer in the application goes through [`Scheduler`], which hands out
//! a [`TaskId`] per scheduled task so it can be cancelled later. The browser
//! implementation lives in `utils::timer`; tests drive a manual clock
//! instead (see [`testing::ManualScheduler`]).

use std::cell::Cell;
use std::rc::Rc;

/// Token identifying a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Runs callbacks after a delay on the current thread.
pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId;

    /// Prevent a pending task from running. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TaskId);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        (**self).schedule(delay_ms, task)
    }

    fn cancel(&self, id: TaskId) {
        (**self).cancel(id)
    }
}

// =============================================================================
// Debouncer
// =============================================================================

/// Collapses bursts of calls into the last one.
///
/// Each [`call`](Debouncer::call) cancels the previously pending task and
/// restarts the delay, so the action only runs once the caller has been
/// quiet for `delay_ms`.
pub struct Debouncer<S> {
    scheduler: S,
    delay_ms: u32,
    pending: Cell<Option<TaskId>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Cell::new(None),
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        let id = self.scheduler.schedule(self.delay_ms, Box::new(action));
        self.pending.set(Some(id));
    }
}

// =============================================================================
// Test Support
// =============================================================================
