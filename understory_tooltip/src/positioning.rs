// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning configuration handed to an external positioning engine.
//!
//! Nothing here computes geometry. A tooltip only carries its [`Positioning`]
//! so the host can pass it, unchanged, to whatever places overlays.
//!
//! The shorthand strings follow the usual `"<position>[-<align>]"` form:
//!
//! ```
//! use understory_tooltip::positioning::{Alignment, Position, Positioning};
//!
//! let p: Positioning = "below-end".parse().unwrap();
//! assert_eq!(p.position, Position::Below);
//! assert_eq!(p.align, Alignment::End);
//!
//! // Alignment must run along the side: "above-top" makes no sense.
//! assert!(Positioning::parse("above-top").is_err());
//! ```

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::Vec2;

/// Side of the target the overlay is placed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Above the target.
    #[default]
    Above,
    /// Below the target.
    Below,
    /// Before the target in the inline direction.
    Before,
    /// After the target in the inline direction.
    After,
}

/// Alignment of the overlay along the chosen side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Centered on the target.
    #[default]
    Center,
    /// Inline start edges aligned (`Above` / `Below`).
    Start,
    /// Inline end edges aligned (`Above` / `Below`).
    End,
    /// Top edges aligned (`Before` / `After`).
    Top,
    /// Bottom edges aligned (`Before` / `After`).
    Bottom,
}

/// Where an overlay should go relative to its target.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Positioning {
    /// Side of the target.
    pub position: Position,
    /// Alignment along that side.
    pub align: Alignment,
    /// Extra displacement applied by the positioning engine.
    pub offset: Vec2,
}

impl Positioning {
    /// Positioning on `position` with centered alignment and no offset.
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            align: Alignment::Center,
            offset: Vec2::ZERO,
        }
    }

    /// Set the alignment.
    #[must_use]
    pub const fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Parse a shorthand such as `"above"`, `"below-start"` or `"after-bottom"`.
    pub fn parse(shorthand: &str) -> Result<Self, ParsePositioningError> {
        let err = || ParsePositioningError {
            input: String::from(shorthand),
        };
        let (side, align) = match shorthand.split_once('-') {
            Some((side, align)) => (side, Some(align)),
            None => (shorthand, None),
        };
        let position = match side {
            "above" => Position::Above,
            "below" => Position::Below,
            "before" => Position::Before,
            "after" => Position::After,
            _ => return Err(err()),
        };
        let vertical_side = matches!(position, Position::Above | Position::Below);
        let align = match (align, vertical_side) {
            (None, _) => Alignment::Center,
            (Some("start"), true) => Alignment::Start,
            (Some("end"), true) => Alignment::End,
            (Some("top"), false) => Alignment::Top,
            (Some("bottom"), false) => Alignment::Bottom,
            _ => return Err(err()),
        };
        Ok(Self::new(position).with_align(align))
    }
}

impl FromStr for Positioning {
    type Err = ParsePositioningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned for an unrecognized positioning shorthand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePositioningError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParsePositioningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid positioning shorthand {:?}", self.input)
    }
}

impl core::error::Error for ParsePositioningError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn bare_sides_center() {
        for (s, p) in [
            ("above", Position::Above),
            ("below", Position::Below),
            ("before", Position::Before),
            ("after", Position::After),
        ] {
            let parsed = Positioning::parse(s).unwrap();
            assert_eq!(parsed.position, p);
            assert_eq!(parsed.align, Alignment::Center);
            assert_eq!(parsed.offset, Vec2::ZERO);
        }
    }

    #[test]
    fn alignment_must_match_side() {
        assert_eq!(
            Positioning::parse("before-top").unwrap().align,
            Alignment::Top
        );
        assert_eq!(
            Positioning::parse("above-start").unwrap().align,
            Alignment::Start
        );
        assert!(Positioning::parse("before-start").is_err());
        assert!(Positioning::parse("below-bottom").is_err());
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "left", "above-", "above-start-end", "ABOVE"] {
            assert!(Positioning::parse(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = Positioning::parse("sideways").unwrap_err();
        assert_eq!(err.to_string(), "invalid positioning shorthand \"sideways\"");
    }

    #[test]
    fn default_is_above_center() {
        let p = Positioning::default();
        assert_eq!(p.position, Position::Above);
        assert_eq!(p.align, Alignment::Center);
    }
}
