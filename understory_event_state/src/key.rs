// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard keys, modifiers, and key-down events.
//!
//! Keys are parsed from the DOM `KeyboardEvent.key` vocabulary, so hosts that
//! already speak that dialect can feed strings straight through
//! [`Key::from_name`]. Only the keys that controls care about get their own
//! variant; everything else is kept by name.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::key::{Key, KeyEvent, Modifiers};
//!
//! let ev = KeyEvent::new(Key::from_name("Enter")).with_modifiers(Modifiers::SHIFT);
//! assert_eq!(ev.key, Key::Enter);
//! assert!(ev.key.is_activation());
//! assert!(ev.modifiers.contains(Modifiers::SHIFT));
//!
//! assert_eq!(Key::from_name("a"), Key::Character('a'));
//! assert!(!Key::from_name("ArrowDown").is_activation());
//! ```

use alloc::string::String;

use crate::cancel::{Cancelable, EventFlags};

/// A logical keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The primary activation key.
    Enter,
    /// The secondary activation key (`" "` in DOM terms).
    Space,
    /// Dismisses transient UI such as tooltips.
    Escape,
    /// Moves focus.
    Tab,
    /// A key that produces a single printable character.
    Character(char),
    /// Any other named key, kept verbatim (`"ArrowDown"`, `"F5"`, ...).
    Named(String),
    /// The host could not identify the key.
    Unidentified,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy spellings `"Spacebar"` and `"Esc"` are accepted.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "" | "Unidentified" => Self::Unidentified,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Named(String::from(name)),
                }
            }
        }
    }

    /// Returns `true` for the keys that activate a native button: Enter and Space.
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

bitflags::bitflags! {
    /// Modifier keys held while an event was produced.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows.
        const META    = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// A key-down event delivered to a focused control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that went down.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
    /// `true` when produced by auto-repeat.
    pub repeat: bool,
    flags: EventFlags,
}

impl KeyEvent {
    /// A fresh, uncanceled key-down for `key` with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            repeat: false,
            flags: EventFlags::default(),
        }
    }

    /// Set the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the event as auto-repeat.
    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

impl Cancelable for KeyEvent {
    fn flags(&self) -> &EventFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut EventFlags {
        &mut self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_activation_keys() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Spacebar"), Key::Space);
        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
    }

    #[test]
    fn parses_escape_spellings() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert!(!Key::Escape.is_activation());
    }

    #[test]
    fn single_characters_and_named_keys() {
        assert_eq!(Key::from_name("x"), Key::Character('x'));
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(
            Key::from_name("ArrowLeft"),
            Key::Named(String::from("ArrowLeft"))
        );
        assert_eq!(Key::from_name(""), Key::Unidentified);
        assert_eq!(Key::from_name("Unidentified"), Key::Unidentified);
    }

    #[test]
    fn character_space_is_not_the_space_key() {
        // Only the literal " " maps to Space; other whitespace stays a character.
        assert_eq!(Key::from_name("\t"), Key::Character('\t'));
        assert!(!Key::Character('\t').is_activation());
    }

    #[test]
    fn builder_sets_fields_and_leaves_flags_clear() {
        let ev = KeyEvent::new(Key::Tab)
            .with_modifiers(Modifiers::SHIFT | Modifiers::CONTROL)
            .with_repeat(true);
        assert_eq!(ev.key, Key::Tab);
        assert!(ev.modifiers.contains(Modifiers::CONTROL));
        assert!(!ev.modifiers.contains(Modifiers::ALT));
        assert!(ev.repeat);
        assert!(!ev.is_default_prevented());
        assert!(!ev.is_propagation_stopped());
    }
}
