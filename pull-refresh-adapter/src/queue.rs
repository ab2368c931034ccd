use alloc::collections::VecDeque;

/// A single-threaded queue of deferred tasks.
///
/// This stands in for "run this later on the main queue": callers `schedule` a task for a
/// deadline and the event loop drains due tasks with `pop_due(now_ms)`. Tasks are plain values so
/// the loop can dispatch them with full mutable access to its own state.
///
/// Tasks with equal deadlines are released in scheduling order.
#[derive(Clone, Debug)]
pub struct TaskQueue<T> {
    tasks: VecDeque<(u64, T)>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Schedules `task` to become due at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let at = self.tasks.partition_point(|(due, _)| *due <= due_ms);
        self.tasks.insert(at, (due_ms, task));
        atrace!(due_ms, pending = self.tasks.len(), "TaskQueue::schedule");
    }

    /// Schedules `task` to become due `delay_ms` after `now_ms`.
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, task: T) {
        self.schedule(now_ms.saturating_add(delay_ms), task);
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.front().map(|(due, _)| *due)
    }

    /// Removes and returns the earliest task if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        if self.next_due()? > now_ms {
            return None;
        }
        self.tasks.pop_front().map(|(_, task)| task)
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
