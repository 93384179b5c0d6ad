//! Delayed carry scheduling
//!
//! A carry is never applied inline. The engine hands back a [`ScheduledCarry`]
//! stamped with its generation and a due time, and whoever drives the event
//! loop parks it in a [`CarryTimer`] until it is due. Tasks are not cancelled
//! on reset; the engine recognises a stale generation when the task fires.

use super::column::Column;
use std::collections::VecDeque;
use std::time::Instant;

/// A carry out of `column` waiting for its display delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCarry {
    pub column: Column,
    pub generation: u64,
    pub due: Instant,
}

/// FIFO of pending carry tasks
#[derive(Debug, Default)]
pub struct CarryTimer {
    pending: VecDeque<ScheduledCarry>,
}

impl CarryTimer {
    pub fn new() -> Self {
        CarryTimer {
            pending: VecDeque::new(),
        }
    }

    pub fn schedule(&mut self, task: ScheduledCarry) {
        self.pending.push_back(task);
    }

    /// Pop the oldest task if its due time has passed
    pub fn pop_due(&mut self, now: Instant) -> Option<ScheduledCarry> {
        if self.pending.front().is_some_and(|task| task.due <= now) {
            self.pending.pop_front()
        } else {
            None
        }
    }

    /// Due time of the next task, if any
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|task| task.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
