// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer queues for UI runtimes.
//!
//! UI controls often need "do this later" behavior: show a tooltip after a
//! hover delay, hide it shortly after the pointer leaves, and forget either
//! plan if the user changes their mind. This crate keeps those plans as data.
//! It never reads a clock and never spawns anything: the host passes the
//! current time in and decides when to call back.
//!
//! ## Time
//!
//! Time is an opaque, monotonically non-decreasing `u64`. Milliseconds are the
//! convention used throughout Understory, but the queue only compares values.
//!
//! ## Ordering
//!
//! Timers fire in deadline order. Timers with equal deadlines fire in the order
//! they were scheduled. A timer is due when `deadline <= now`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_timing::TimerQueue;
//!
//! let mut q = TimerQueue::new();
//! let show = q.schedule_after(1_000, 250, "show");
//! let _hide = q.schedule_after(1_000, 500, "hide");
//! assert_eq!(q.next_deadline(), Some(1_250));
//!
//! // The user changed their mind before the show fired.
//! assert_eq!(q.cancel(show), Some("show"));
//!
//! // Nothing is due yet at t=1_300; the hide fires at t=1_500.
//! assert!(q.pop_due(1_300).is_none());
//! let fired: Vec<_> = q.drain_due(1_500).map(|(_, p)| p).collect();
//! assert_eq!(fired, vec!["hide"]);
//! assert!(q.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Handle to a scheduled timer.
///
/// Handles are never reused within one queue, so a stale handle can not
/// cancel a different timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    deadline: u64,
    id: TimerId,
    payload: T,
}

impl<T> Entry<T> {
    fn order(&self) -> (u64, TimerId) {
        (self.deadline, self.id)
    }
}

/// A queue of pending timers carrying payloads of type `T`.
///
/// Storage is a vector sorted latest-first so that the next timer to fire sits
/// at the end. Queues in UI code hold a handful of entries, where this beats a
/// heap and keeps cancellation simple.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let key = (deadline, id);
        let at = self.entries.partition_point(|e| e.order() > key);
        self.entries.insert(
            at,
            Entry {
                deadline,
                id,
                payload,
            },
        );
        id
    }

    /// Schedule `payload` to fire `delay` after `now`.
    ///
    /// Saturates instead of overflowing for very large delays.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancel a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was canceled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(at).payload)
    }

    /// Returns `true` while `id` is pending.
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Deadline of the next timer to fire, if any.
    ///
    /// Hosts use this to arm their native timer or frame callback.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.last().map(|e| e.deadline)
    }

    /// Remove and return the next timer if it is due at `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.last()?.deadline > now {
            return None;
        }
        self.entries.pop().map(|e| (e.id, e.payload))
    }

    /// Remove and yield every timer due at `now`, in firing order.
    ///
    /// Timers left in the iterator when it is dropped stay queued.
    pub fn drain_due(&mut self, now: u64) -> DrainDue<'_, T> {
        DrainDue { queue: self, now }
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator returned by [`TimerQueue::drain_due`].
#[derive(Debug)]
pub struct DrainDue<'a, T> {
    queue: &'a mut TimerQueue<T>,
    now: u64,
}

impl<T> Iterator for DrainDue<'_, T> {
    type Item = (TimerId, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_due(self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_queue_has_nothing_due() {
        let mut q: TimerQueue<u8> = TimerQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
        assert_eq!(q.pop_due(u64::MAX), None);
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(30, 'c');
        q.schedule(10, 'a');
        q.schedule(20, 'b');
        let fired: Vec<char> = q.drain_due(100).map(|(_, p)| p).collect();
        assert_eq!(fired, vec!['a', 'b', 'c']);
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(5, 1);
        q.schedule(5, 2);
        q.schedule(5, 3);
        let fired: Vec<i32> = q.drain_due(5).map(|(_, p)| p).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn deadline_is_inclusive() {
        let mut q = TimerQueue::new();
        q.schedule(10, ());
        assert!(q.pop_due(9).is_none());
        assert!(q.pop_due(10).is_some());
    }

    #[test]
    fn drain_stops_at_first_future_timer() {
        let mut q = TimerQueue::new();
        q.schedule(1, "early");
        q.schedule(50, "late");
        let fired: Vec<&str> = q.drain_due(10).map(|(_, p)| p).collect();
        assert_eq!(fired, vec!["early"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(50));
    }

    #[test]
    fn canceled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10, "a");
        let b = q.schedule(20, "b");
        assert!(q.contains(a));
        assert_eq!(q.cancel(a), Some("a"));
        assert!(!q.contains(a));
        assert_eq!(q.cancel(a), None);
        let fired: Vec<_> = q.drain_due(100).collect();
        assert_eq!(fired, vec![(b, "b")]);
    }

    #[test]
    fn ids_are_not_reused_after_firing() {
        let mut q = TimerQueue::new();
        let first = q.schedule(0, ());
        let _ = q.pop_due(0);
        let second = q.schedule(0, ());
        assert_ne!(first, second);
        assert_eq!(q.cancel(first), None);
        assert!(q.contains(second));
    }

    #[test]
    fn schedule_after_saturates() {
        let mut q = TimerQueue::new();
        q.schedule_after(u64::MAX - 1, 10, ());
        assert_eq!(q.next_deadline(), Some(u64::MAX));
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = TimerQueue::new();
        q.schedule(1, ());
        q.schedule(2, ());
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }
}
