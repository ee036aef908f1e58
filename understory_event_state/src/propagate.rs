// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubbling helper: walk a root→target path outward and honor stop requests.
//!
//! The helper applies simple propagation rules:
//!
//! - The target (last path entry) sees the event first, then each ancestor up to the root.
//! - A handler that calls [`Cancelable::stop_propagation`] ends the walk;
//!   no outer node sees the event.
//! - Default prevention is only recorded on the event; the walk continues.
//!   Read the flag after [`bubble`] returns to decide whether to run the default action.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::activate::ActivateEvent;
//! use understory_event_state::cancel::Cancelable;
//! use understory_event_state::propagate::bubble;
//!
//! let mut ev = ActivateEvent::new();
//! let mut seen = Vec::new();
//! let stopped_at = bubble(&["root", "list", "link"], &mut ev, |node, ev| {
//!     seen.push(*node);
//!     if *node == "link" {
//!         ev.prevent_default();
//!     }
//! });
//!
//! // Nobody stopped the event, so every node saw it (target first).
//! assert_eq!(stopped_at, None);
//! assert_eq!(seen, vec!["link", "list", "root"]);
//! assert!(ev.is_default_prevented());
//! ```

use crate::cancel::Cancelable;

/// Run `handler` for each node of `path` from the target (last) to the root (first).
///
/// Returns the node at which propagation was stopped, or `None` if every node
/// saw the event. An event that arrives already stopped reaches no node.
pub fn bubble<K, E, F>(path: &[K], event: &mut E, mut handler: F) -> Option<K>
where
    K: Copy,
    E: Cancelable + ?Sized,
    F: FnMut(&K, &mut E),
{
    if event.is_propagation_stopped() {
        return None;
    }
    for node in path.iter().rev() {
        handler(node, event);
        if event.is_propagation_stopped() {
            return Some(*node);
        }
    }
    None
}
