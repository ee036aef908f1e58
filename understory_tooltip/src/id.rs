// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element id generation.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

/// Hands out unique element ids such as `tooltip-1`, `tooltip-2`, ...
///
/// There is no global counter; keep one generator per document (or per
/// rendering root) so ids stay unique where they are referenced.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: Cow<'static, str>,
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("tooltip-")
    }
}

impl IdGenerator {
    /// A generator producing `<prefix><n>` starting at `n = 1`.
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// The next id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_prefixed() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(), "tooltip-1");
        assert_eq!(ids.next_id(), "tooltip-2");

        let mut custom = IdGenerator::new("hint-");
        assert_eq!(custom.next_id(), "hint-1");
    }
}
