use std::mem;

use log::info;

/// Cancellation token for a task registered with [`NextTickQueue`]. Hosts
/// hold onto this for the lifetime of the owning session and cancel it on
/// teardown, so the callback is never invoked on a destroyed context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// One-shot deferred task queue.
///
/// Tasks registered via [`schedule_once`](Self::schedule_once) run exactly
/// once, when the host drains the queue at the start of its next update
/// cycle. A task scheduled while the queue is draining lands in the
/// following cycle, never the current one. All of this runs on the session's
/// single logical thread, so there is no locking.
pub struct NextTickQueue<C> {
    next_id: u64,
    pending: Vec<(u64, Box<dyn FnOnce(&mut C)>)>,
}

impl<C> NextTickQueue<C> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Registers a task to run once on the next cycle, returning its
    /// cancellation handle
    pub fn schedule_once(&mut self, task: Box<dyn FnOnce(&mut C)>) -> TaskHandle {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push((id, task));
        TaskHandle(id)
    }

    /// Drops a pending task. Cancelling a task that already ran (or was
    /// already cancelled) is a no-op.
    pub fn cancel(&mut self, handle: &TaskHandle) {
        let before = self.pending.len();
        self.pending.retain(|(id, _)| *id != handle.0);
        if self.pending.len() != before {
            info!("cancelled deferred task {}", handle.0);
        }
    }

    pub fn is_scheduled(&self, handle: &TaskHandle) -> bool {
        self.pending.iter().any(|(id, _)| *id == handle.0)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Runs every pending, non-cancelled task exactly once. Called by the
    /// host at the start of each update cycle.
    pub fn run_due(&mut self, context: &mut C) {
        let due = mem::take(&mut self.pending);
        for (_, task) in due {
            task(context);
        }
    }
}

impl<C> Default for NextTickQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
