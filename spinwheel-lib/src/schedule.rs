//! Cooperative scheduling of frame ticks and one-shot timers.
//!
//! Nothing runs on its own: the owner calls [`Scheduler::take_due`] from its
//! per-frame driver and dispatches whatever comes back. Every scheduled task
//! yields a [`TaskHandle`] that can be cancelled.

use std::time::Duration;

/// Cancellation handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// Runs on the next frame tick.
    NextFrame,
    /// Runs on the first tick at or after the deadline.
    At(Duration),
}

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    trigger: Trigger,
    task: T,
}

/// Queue of pending frame requests and timers.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` on the next frame tick.
    pub fn request_frame(&mut self, task: T) -> TaskHandle {
        self.push(Trigger::NextFrame, task)
    }

    /// Run `task` once, `delay` after `now`.
    pub fn set_timeout(&mut self, task: T, delay: Duration, now: Duration) -> TaskHandle {
        self.push(Trigger::At(now + delay), task)
    }

    fn push(&mut self, trigger: Trigger, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            trigger,
            task,
        });
        handle
    }

    /// Cancel the task behind `handle` and clear the slot.
    ///
    /// An empty slot or a handle whose task already ran is a no-op.
    /// Returns true if a pending task was removed.
    pub fn cancel(&mut self, handle: &mut Option<TaskHandle>) -> bool {
        let Some(handle) = handle.take() else {
            return false;
        };
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    /// Returns true if the task behind `handle` has not run or been cancelled.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Remove and return every task due at `now`, in scheduling order.
    ///
    /// Frame requests are always due. Tasks scheduled while the returned
    /// batch is being dispatched wait for the next call.
    pub fn take_due(&mut self, now: Duration) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());

        for entry in self.entries.drain(..) {
            let ready = match entry.trigger {
                Trigger::NextFrame => true,
                Trigger::At(deadline) => deadline <= now,
            };
            if ready {
                due.push((entry.handle, entry.task));
            } else {
                kept.push(entry);
            }
        }

        self.entries = kept;
        due
    }

    /// Returns true if a frame tick has been requested.
    pub fn has_frame_request(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.trigger == Trigger::NextFrame)
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .filter_map(|e| match e.trigger {
                Trigger::At(deadline) => Some(deadline),
                Trigger::NextFrame => None,
            })
            .min()
    }

    /// Number of outstanding tasks.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Cancel everything. Returns the number of tasks dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_requests_made_during_dispatch_wait_for_next_tick() {
        let mut scheduler = Scheduler::new();
        scheduler.request_frame("a");

        let due = scheduler.take_due(Duration::ZERO);
        assert_eq!(due.len(), 1);

        scheduler.request_frame("b");
        assert_eq!(scheduler.pending(), 1);
        let due = scheduler.take_due(Duration::from_millis(16));
        assert_eq!(due[0].1, "b");
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.request_frame(());
        let b = scheduler.request_frame(());
        assert_ne!(a, b);
    }
}
