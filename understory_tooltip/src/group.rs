// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip groups: at most one visible tooltip at a time.
//!
//! A [`TooltipGroup`] owns a set of tooltips keyed by an application id and
//! coordinates them:
//!
//! - Showing a tooltip hides the one that was visible before, immediately.
//! - While a tooltip is visible, moving to another trigger shows the new
//!   tooltip with no delay, so scanning across a toolbar feels continuous.
//!
//! The rule holds for controlled tooltips (see
//! [`TooltipProps::visible`](crate::TooltipProps::visible)) as well. A
//! superseded controlled tooltip receives the usual hide request through
//! `on_visible_change` and is then forced hidden, so its owner should mirror
//! that request into its own state.
//!
//! ## Tracing
//!
//! The `*_with_trace` methods report every visibility transition to a
//! [`GroupTrace`] sink. [`TransitionLog`] records them in order.
//!
//! ```
//! use understory_tooltip::group::{Cause, TooltipGroup, TransitionLog};
//! use understory_tooltip::{IdGenerator, Tooltip, TooltipProps, TriggerEvent};
//!
//! let mut ids = IdGenerator::default();
//! let mut group = TooltipGroup::new();
//! group.insert("bold", Tooltip::new(TooltipProps::new("Bold"), &mut ids));
//! group.insert("italic", Tooltip::new(TooltipProps::new("Italic"), &mut ids));
//!
//! let mut log = TransitionLog::new();
//! group.on_trigger_with_trace("bold", TriggerEvent::PointerEnter, 0, &mut log);
//! group.tick_with_trace(250, &mut log);
//! assert_eq!(group.visible(), Some("bold"));
//!
//! // Moving to the next button swaps tooltips without waiting.
//! group.on_trigger_with_trace("italic", TriggerEvent::PointerEnter, 300, &mut log);
//! assert_eq!(group.visible(), Some("italic"));
//! assert_eq!(
//!     log.entries().iter().map(|t| (t.key, t.visible, t.cause)).collect::<Vec<_>>(),
//!     vec![
//!         ("bold", true, Cause::Delay),
//!         ("italic", true, Cause::Trigger(TriggerEvent::PointerEnter)),
//!         ("bold", false, Cause::Superseded),
//!     ]
//! );
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use understory_event_state::key::KeyEvent;

use crate::tooltip::Tooltip;
use crate::types::TriggerEvent;

/// Why a tooltip changed visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// A trigger event applied without delay.
    Trigger(TriggerEvent),
    /// A delayed change came due.
    Delay,
    /// Escape was pressed.
    Escape,
    /// Another tooltip in the group was shown.
    Superseded,
    /// An explicit show/hide or controlled update.
    Direct,
}

/// A sink for group visibility transitions.
pub trait GroupTrace<K> {
    /// Called after `key` became visible (`visible == true`) or hidden.
    fn transition(&mut self, key: K, visible: bool, cause: Cause);
}

impl<K> GroupTrace<K> for () {
    fn transition(&mut self, _key: K, _visible: bool, _cause: Cause) {}
}

/// One recorded transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<K> {
    /// The tooltip.
    pub key: K,
    /// Its new visibility.
    pub visible: bool,
    /// What caused the change.
    pub cause: Cause,
}

/// Records transitions in the order they happened.
#[derive(Clone, Debug, Default)]
pub struct TransitionLog<K> {
    entries: Vec<Transition<K>>,
}

impl<K> TransitionLog<K> {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Recorded transitions, oldest first.
    pub fn entries(&self) -> &[Transition<K>] {
        &self.entries
    }

    /// Forget all recorded transitions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K> GroupTrace<K> for TransitionLog<K> {
    fn transition(&mut self, key: K, visible: bool, cause: Cause) {
        self.entries.push(Transition {
            key,
            visible,
            cause,
        });
    }
}

#[derive(Debug)]
struct Entry {
    // Insertion order; breaks deadline ties in `tick`.
    seq: u64,
    tooltip: Tooltip,
}

/// A set of tooltips of which at most one is visible.
#[derive(Debug)]
pub struct TooltipGroup<K> {
    tooltips: HashMap<K, Entry>,
    visible: Option<K>,
    next_seq: u64,
}

impl<K: Copy + Eq + Hash> Default for TooltipGroup<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> TooltipGroup<K> {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            tooltips: HashMap::new(),
            visible: None,
            next_seq: 0,
        }
    }

    /// Add a tooltip, returning the one previously stored under `key`.
    ///
    /// Inserting a visible tooltip supersedes the visible one.
    pub fn insert(&mut self, key: K, tooltip: Tooltip) -> Option<Tooltip> {
        self.insert_with_trace(key, tooltip, &mut ())
    }

    /// [`insert`](Self::insert), reporting transitions to `trace`.
    pub fn insert_with_trace(
        &mut self,
        key: K,
        tooltip: Tooltip,
        trace: &mut impl GroupTrace<K>,
    ) -> Option<Tooltip> {
        let seq = self.next_seq;
        self.next_seq += 1;
        let shown = tooltip.is_visible();
        let old = self.tooltips.insert(key, Entry { seq, tooltip });
        if self.visible == Some(key) && !shown {
            self.visible = None;
        }
        if shown {
            self.settle(key, Cause::Direct, trace);
        }
        old.map(|e| e.tooltip)
    }

    /// Remove a tooltip.
    pub fn remove(&mut self, key: K) -> Option<Tooltip> {
        if self.visible == Some(key) {
            self.visible = None;
        }
        self.tooltips.remove(&key).map(|e| e.tooltip)
    }

    /// Look up a tooltip.
    pub fn get(&self, key: K) -> Option<&Tooltip> {
        self.tooltips.get(&key).map(|e| &e.tooltip)
    }

    /// Number of tooltips.
    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    /// Returns `true` if the group holds no tooltips.
    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    /// The visible tooltip, if any.
    pub fn visible(&self) -> Option<K> {
        self.visible
    }

    /// Handle a trigger event for `key`. See [`Tooltip::on_trigger`].
    pub fn on_trigger(&mut self, key: K, event: TriggerEvent, now: u64) -> bool {
        self.on_trigger_with_trace(key, event, now, &mut ())
    }

    /// [`on_trigger`](Self::on_trigger), reporting transitions to `trace`.
    pub fn on_trigger_with_trace(
        &mut self,
        key: K,
        event: TriggerEvent,
        now: u64,
        trace: &mut impl GroupTrace<K>,
    ) -> bool {
        let another_visible = self.visible.is_some_and(|v| v != key);
        let Some(entry) = self.tooltips.get_mut(&key) else {
            return false;
        };
        let show_delay = if another_visible {
            0
        } else {
            entry.tooltip.props().show_delay
        };
        if !entry
            .tooltip
            .on_trigger_with_show_delay(event, now, show_delay)
        {
            return false;
        }
        self.settle(key, Cause::Trigger(event), trace);
        true
    }

    /// Forward a key-down to the visible tooltip (Escape hides it).
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        self.key_down_with_trace(event, &mut ())
    }

    /// [`key_down`](Self::key_down), reporting transitions to `trace`.
    pub fn key_down_with_trace(&mut self, event: &KeyEvent, trace: &mut impl GroupTrace<K>) -> bool {
        let Some(key) = self.visible else {
            return false;
        };
        let Some(entry) = self.tooltips.get_mut(&key) else {
            return false;
        };
        if !entry.tooltip.key_down(event) {
            return false;
        }
        self.settle(key, Cause::Escape, trace);
        true
    }

    /// Show `key` without delay, hiding whatever was visible.
    pub fn show_now(&mut self, key: K) -> bool {
        self.show_now_with_trace(key, &mut ())
    }

    /// [`show_now`](Self::show_now), reporting transitions to `trace`.
    pub fn show_now_with_trace(&mut self, key: K, trace: &mut impl GroupTrace<K>) -> bool {
        self.direct(key, true, trace)
    }

    /// Hide `key` without delay.
    pub fn hide_now(&mut self, key: K) -> bool {
        self.hide_now_with_trace(key, &mut ())
    }

    /// [`hide_now`](Self::hide_now), reporting transitions to `trace`.
    pub fn hide_now_with_trace(&mut self, key: K, trace: &mut impl GroupTrace<K>) -> bool {
        self.direct(key, false, trace)
    }

    /// Update the caller-controlled visibility of `key`.
    /// See [`Tooltip::set_controlled_visible`].
    ///
    /// Showing `key` this way supersedes the visible tooltip, even a
    /// controlled one.
    pub fn set_controlled_visible(&mut self, key: K, visible: Option<bool>) {
        self.set_controlled_visible_with_trace(key, visible, &mut ());
    }

    /// [`set_controlled_visible`](Self::set_controlled_visible), reporting
    /// transitions to `trace`.
    pub fn set_controlled_visible_with_trace(
        &mut self,
        key: K,
        visible: Option<bool>,
        trace: &mut impl GroupTrace<K>,
    ) {
        let Some(entry) = self.tooltips.get_mut(&key) else {
            return;
        };
        let before = entry.tooltip.is_visible();
        entry.tooltip.set_controlled_visible(visible);
        if entry.tooltip.is_visible() != before {
            self.settle(key, Cause::Direct, trace);
        }
    }

    /// Apply every delayed change due at `now`, in deadline order.
    pub fn tick(&mut self, now: u64) -> bool {
        self.tick_with_trace(now, &mut ())
    }

    /// [`tick`](Self::tick), reporting transitions to `trace`.
    pub fn tick_with_trace(&mut self, now: u64, trace: &mut impl GroupTrace<K>) -> bool {
        let mut due: Vec<(u64, u64, K)> = self
            .tooltips
            .iter()
            .filter_map(|(key, entry)| {
                let deadline = entry.tooltip.next_deadline()?;
                (deadline <= now).then_some((deadline, entry.seq, *key))
            })
            .collect();
        due.sort_unstable_by_key(|&(deadline, seq, _)| (deadline, seq));

        let mut changed = false;
        for (_, _, key) in due {
            let Some(entry) = self.tooltips.get_mut(&key) else {
                continue;
            };
            if entry.tooltip.tick(now) {
                changed = true;
                self.settle(key, Cause::Delay, trace);
            }
        }
        changed
    }

    /// Earliest pending deadline across the group.
    pub fn next_deadline(&self) -> Option<u64> {
        self.tooltips
            .values()
            .filter_map(|e| e.tooltip.next_deadline())
            .min()
    }

    fn direct(&mut self, key: K, visible: bool, trace: &mut impl GroupTrace<K>) -> bool {
        let Some(entry) = self.tooltips.get_mut(&key) else {
            return false;
        };
        let changed = if visible {
            entry.tooltip.show_now()
        } else {
            entry.tooltip.hide_now()
        };
        if changed {
            self.settle(key, Cause::Direct, trace);
        }
        changed
    }

    // Record a visibility change of `key` and enforce the one-visible rule.
    fn settle(&mut self, key: K, cause: Cause, trace: &mut impl GroupTrace<K>) {
        let Some(entry) = self.tooltips.get(&key) else {
            return;
        };
        let shown = entry.tooltip.is_visible();
        trace.transition(key, shown, cause);
        if !shown {
            if self.visible == Some(key) {
                self.visible = None;
            }
            return;
        }
        let Some(previous) = self.visible.replace(key) else {
            return;
        };
        if previous == key {
            return;
        }
        if let Some(prev) = self.tooltips.get_mut(&previous) {
            if prev.tooltip.supersede() {
                trace.transition(previous, false, Cause::Superseded);
            }
        }
    }
}
