// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One-shot timer queue driven by explicit instants.
//!
//! The queue never reads the clock itself: callers pass `now` when scheduling
//! and when polling, which keeps the frame loop in control and makes tests
//! deterministic.

use std::time::{Duration, Instant};

/// Handle returned when scheduling a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    // `None` when the deadline overflows `Instant`; such a timer never fires.
    deadline: Option<Instant>,
    payload: T,
}

/// Pending timers carrying a payload each.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    /// Queue `payload` to fire once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: now.checked_add(delay),
            payload,
        });
        id
    }

    /// Remove and return every payload whose deadline is at or before `now`,
    /// ordered by deadline, then by scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.deadline.is_some_and(|d| d <= now));
        self.entries = pending;
        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter().map(|e| e.payload).collect()
    }

    /// Earliest deadline still pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().filter_map(|e| e.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
