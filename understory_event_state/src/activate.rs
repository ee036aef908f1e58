// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation events: the click-equivalent delivered to a control.
//!
//! An activation may come from a pointer (with a position in the control's
//! local space) or be synthesized by the host, for example from assistive
//! technology, in which case there is no position.

use kurbo::Point;

use crate::cancel::{Cancelable, EventFlags};
use crate::key::Modifiers;

/// A click-equivalent activation of a control.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ActivateEvent {
    /// Pointer position in local coordinates, if a pointer produced the activation.
    pub position: Option<Point>,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
    flags: EventFlags,
}

impl ActivateEvent {
    /// An activation without a pointer position.
    pub fn new() -> Self {
        Self::default()
    }

    /// An activation produced by a pointer at `position`.
    pub fn at(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Cancelable for ActivateEvent {
    fn flags(&self) -> &EventFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut EventFlags {
        &mut self.flags
    }
}
