// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tooltip: headless tooltip state for UI toolkits.
//!
//! ## Overview
//!
//! A tooltip is a small overlay attached to a *trigger* element. It appears
//! when the trigger is hovered or focused, disappears when the pointer or
//! focus leaves, and is linked to the trigger for assistive technology.
//! This crate owns the state behind that behavior and nothing else: it does
//! not render, style, animate, or position the overlay.
//!
//! - [`TooltipProps`]: configuration (content, delays, ARIA linkage, controlled visibility).
//! - [`Tooltip`]: the controller that turns trigger events and time into visibility.
//! - [`TooltipTriggerProps`]: ARIA attributes for the trigger element.
//! - [`TooltipState`]: what the renderer needs for a pass.
//! - [`group::TooltipGroup`]: keeps at most one tooltip of a set visible.
//! - [`positioning::Positioning`]: configuration passed through to a positioning engine.
//!
//! ## Time
//!
//! Delays are applied with an [`understory_timing::TimerQueue`]. The host
//! passes the current time (milliseconds) into every call and calls
//! [`Tooltip::tick`] once [`Tooltip::next_deadline`] has passed.
//!
//! ## ARIA linkage
//!
//! [`TriggerAriaAttribute`] chooses how the trigger refers to the tooltip:
//!
//! | Attribute | Trigger gets | Tooltip rendered while hidden |
//! |---|---|---|
//! | `Label` (default) | `aria-label` = content text | no |
//! | `LabelledBy` | `aria-labelledby` = tooltip id | yes |
//! | `DescribedBy` | `aria-describedby` = tooltip id | yes |
//! | `None` | nothing | no |
//!
//! `Label` requires plain-text content; otherwise `LabelledBy` is used.
//!
//! ```
//! use understory_tooltip::{IdGenerator, Tooltip, TooltipProps, TriggerAriaAttribute};
//!
//! let mut ids = IdGenerator::default();
//! let tip = Tooltip::new(
//!     TooltipProps::new("Deleting requires admin rights")
//!         .trigger_aria_attribute(TriggerAriaAttribute::DescribedBy),
//!     &mut ids,
//! );
//!
//! let trigger = tip.trigger_props();
//! assert_eq!(trigger.aria_describedby.as_deref(), Some("tooltip-1"));
//! assert_eq!(trigger.aria_label, None);
//!
//! // Hidden, but rendered so the reference resolves.
//! let state = tip.state();
//! assert!(!state.visible);
//! assert!(state.should_render_tooltip);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod group;
mod id;
pub mod positioning;
mod tooltip;
mod types;

pub use id::IdGenerator;
pub use tooltip::{Tooltip, TooltipState};
pub use types::{
    Appearance, ContentProps, DEFAULT_HIDE_DELAY, DEFAULT_SHOW_DELAY, OnVisibleChangeData,
    TooltipContent, TooltipProps, TooltipTriggerProps, TriggerAriaAttribute, TriggerEvent,
    VisibleChangeHandler,
};
