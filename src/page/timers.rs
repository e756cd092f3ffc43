//! Deterministic one-shot timer queue driven by [`TimerQueue::advance_time`].

use crate::dom::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    DismissAlert(ElementId),
}

#[derive(Debug, Clone)]
struct Timer {
    due_at: u64,
    order: u64,
    task: TimerTask,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_order: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn set_timeout(&mut self, delay_ms: u64, task: TimerTask) {
        let timer = Timer {
            due_at: self.now_ms.saturating_add(delay_ms),
            order: self.next_order,
            task,
        };
        self.next_order += 1;
        self.pending.push(timer);
    }

    /// Moves the clock forward and returns the tasks that came due, ordered by
    /// due time then scheduling order.
    pub fn advance_time(&mut self, delta_ms: u64) -> Vec<TimerTask> {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        let now = self.now_ms;
        let (mut due, rest): (Vec<Timer>, Vec<Timer>) =
            self.pending.drain(..).partition(|t| t.due_at <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.due_at, t.order));
        due.into_iter().map(|t| t.task).collect()
    }
}
