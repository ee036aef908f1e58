// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed event handlers for a derived link.
//!
//! A disabled link must not do anything when activated, whether the
//! activation comes from a pointer or from the keyboard. [`LinkHandlers`]
//! sits between the host and the caller's handlers and enforces that:
//!
//! - Activation of a disabled link prevents the default action (navigation)
//!   and never reaches the caller.
//! - Enter or Space on a disabled link prevents the default action *and*
//!   stops propagation, so no ancestor turns the key into a click.
//! - Everything else is passed to the caller's handler untouched.

use core::fmt;

use understory_event_state::activate::ActivateEvent;
use understory_event_state::cancel::Cancelable;
use understory_event_state::key::KeyEvent;

use crate::Handler;

/// The activation and key-down handlers of a derived link.
pub struct LinkHandlers {
    swallows_activation: bool,
    on_activate: Option<Handler<ActivateEvent>>,
    on_key_down: Option<Handler<KeyEvent>>,
}

impl LinkHandlers {
    /// Wrap the caller's handlers.
    ///
    /// `swallows_activation` is the logical disabled state:
    /// `disabled || disabled_focusable`.
    pub fn new(
        swallows_activation: bool,
        on_activate: Option<Handler<ActivateEvent>>,
        on_key_down: Option<Handler<KeyEvent>>,
    ) -> Self {
        Self {
            swallows_activation,
            on_activate,
            on_key_down,
        }
    }

    /// Deliver an activation (click-equivalent).
    pub fn activate(&mut self, event: &mut ActivateEvent) {
        if self.swallows_activation {
            event.prevent_default();
            return;
        }
        if let Some(handler) = self.on_activate.as_mut() {
            handler(event);
        }
    }

    /// Deliver a key-down.
    pub fn key_down(&mut self, event: &mut KeyEvent) {
        if self.swallows_activation && event.key.is_activation() {
            event.prevent_default();
            event.stop_propagation();
            return;
        }
        if let Some(handler) = self.on_key_down.as_mut() {
            handler(event);
        }
    }

    /// Returns `true` when activation is swallowed.
    ///
    /// This is the logical disabled state, which also covers
    /// `disabled_focusable`; see [`LinkState::disabled`](crate::LinkState::disabled)
    /// for the raw flag.
    pub fn swallows_activation(&self) -> bool {
        self.swallows_activation
    }
}

impl fmt::Debug for LinkHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkHandlers")
            .field("swallows_activation", &self.swallows_activation)
            .field("on_activate", &self.on_activate.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}
