// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancelation flags shared by every event payload.

/// Default-prevention and propagation state carried by an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventFlags {
    /// The host should skip the default action (navigation, form submit, ...).
    pub default_prevented: bool,
    /// Ancestors must not observe the event.
    pub propagation_stopped: bool,
}

/// Events whose default action and propagation can be canceled by handlers.
///
/// Implementors only expose their [`EventFlags`]; the rest is provided.
pub trait Cancelable {
    /// Shared view of the flags.
    fn flags(&self) -> &EventFlags;

    /// Mutable view of the flags.
    fn flags_mut(&mut self) -> &mut EventFlags;

    /// Ask the host to skip the default action for this event.
    fn prevent_default(&mut self) {
        self.flags_mut().default_prevented = true;
    }

    /// Keep this event from reaching any further ancestors.
    fn stop_propagation(&mut self) {
        self.flags_mut().propagation_stopped = true;
    }

    /// Returns `true` once [`prevent_default`](Self::prevent_default) was called.
    fn is_default_prevented(&self) -> bool {
        self.flags().default_prevented
    }

    /// Returns `true` once [`stop_propagation`](Self::stop_propagation) was called.
    fn is_propagation_stopped(&self) -> bool {
        self.flags().propagation_stopped
    }
}

impl Cancelable for EventFlags {
    fn flags(&self) -> &EventFlags {
        self
    }

    fn flags_mut(&mut self) -> &mut EventFlags {
        self
    }
}
