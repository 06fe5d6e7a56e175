//! Browser [`Scheduler`] backed by `setTimeout`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

use crate::core::{Scheduler, TaskId};

/// Handles of tasks that have not fired yet, keyed by [`TaskId`].
///
/// Dropping a handle is what cancels it, so an entry must leave the map
/// either when its task fires or when it is cancelled.
struct PendingTimers<H> {
    next_id: Cell<u64>,
    handles: RefCell<HashMap<TaskId, H>>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            handles: RefCell::new(HashMap::new()),
        }
    }
}

impl<H> PendingTimers<H> {
    fn next_id(&self) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        id
    }

    fn insert(&self, id: TaskId, handle: H) {
        self.handles.borrow_mut().insert(id, handle);
    }

    /// Remove and return the handle for `id`, if it is still pending.
    fn take(&self, id: TaskId) -> Option<H> {
        self.handles.borrow_mut().remove(&id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.handles.borrow().len()
    }
}

/// Schedules tasks with `gloo-timers`.
///
/// Each pending task owns its [`Timeout`]; cancelling drops the handle,
/// which clears the browser timer and frees the callback.
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
    pending: Rc<PendingTimers<Timeout>>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskId {
        let id = self.pending.next_id();
        let pending: Weak<PendingTimers<Timeout>> = Rc::downgrade(&self.pending);

        let timeout = Timeout::new(delay_ms, move || {
            let handle = pending.upgrade().and_then(|p| p.take(id));
            if handle.is_some() {
                task();
            }
        });
        self.pending.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TaskId) {
        drop(self.pending.take(id));
    }
}
