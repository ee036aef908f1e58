// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: event payloads for interactive UI controls.
//!
//! This crate provides the small, framework-agnostic event types that
//! interactive controls (links, buttons, tooltip triggers) consume:
//!
//! - [`key`]: Keyboard keys, modifier flags, and key-down events
//! - [`activate`]: Click-equivalent activation events
//! - [`cancel`]: Default-prevention and propagation flags shared by all events
//! - [`propagate`]: Bubble an event from a target up through its ancestors
//!
//! ## Design Philosophy
//!
//! Events here are plain data plus two flags. A handler may *prevent the
//! default action* (for example navigation on a link) and may *stop
//! propagation* so ancestors never observe the event. The crate does not
//! assume any particular UI framework, DOM, or scene graph; hosts translate
//! their native events into these payloads and read the flags back.
//!
//! ## Keyboard activation
//!
//! Native buttons activate on Enter and Space. Controls rendered as something
//! else use [`key::Key::is_activation`] to match that behavior:
//!
//! ```rust
//! use understory_event_state::cancel::Cancelable;
//! use understory_event_state::key::{Key, KeyEvent};
//!
//! let mut ev = KeyEvent::new(Key::from_name(" "));
//! assert!(ev.key.is_activation());
//!
//! ev.prevent_default();
//! ev.stop_propagation();
//! assert!(ev.is_default_prevented());
//! assert!(ev.is_propagation_stopped());
//! ```
//!
//! ## Bubbling
//!
//! [`propagate::bubble`] walks a root→target path from the target outward and
//! stops as soon as a handler stops propagation:
//!
//! ```rust
//! use understory_event_state::cancel::Cancelable;
//! use understory_event_state::key::{Key, KeyEvent};
//! use understory_event_state::propagate::bubble;
//!
//! let mut ev = KeyEvent::new(Key::Enter);
//! let mut seen = Vec::new();
//! let stopped_at = bubble(&[1, 2, 3], &mut ev, |node, ev| {
//!     seen.push(*node);
//!     if *node == 3 {
//!         ev.stop_propagation();
//!     }
//! });
//! assert_eq!(stopped_at, Some(3));
//! assert_eq!(seen, vec![3]);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod activate;
pub mod cancel;
pub mod key;
pub mod propagate;
