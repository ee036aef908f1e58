// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip controller: delayed show/hide driven by trigger events.
//!
//! ## Usage
//!
//! 1) Create a [`Tooltip`] from [`TooltipProps`] and an [`IdGenerator`].
//! 2) Apply [`Tooltip::trigger_props`] to the trigger element.
//! 3) Forward trigger events with [`Tooltip::on_trigger`] and key-downs with [`Tooltip::key_down`].
//! 4) Call [`Tooltip::tick`] when [`Tooltip::next_deadline`] passes.
//! 5) Render from [`Tooltip::state`].
//!
//! ## Controlled and uncontrolled visibility
//!
//! Without [`TooltipProps::visible`] the tooltip owns its visibility and
//! reports each change through `on_visible_change`. With it, the tooltip only
//! *requests* changes through `on_visible_change`; the caller decides and
//! reports back with [`Tooltip::set_controlled_visible`]. The one exception is
//! a [`TooltipGroup`](crate::group::TooltipGroup), which forces a controlled
//! tooltip hidden when it shows another one.
//!
//! ## Minimal example
//!
//! ```
//! use understory_tooltip::{IdGenerator, Tooltip, TooltipProps, TriggerEvent};
//!
//! let mut ids = IdGenerator::default();
//! let mut tip = Tooltip::new(TooltipProps::new("Save changes"), &mut ids);
//! assert_eq!(tip.trigger_props().aria_label.as_deref(), Some("Save changes"));
//!
//! // Hover at t=0; the default show delay is 250ms.
//! tip.on_trigger(TriggerEvent::PointerEnter, 0);
//! assert_eq!(tip.next_deadline(), Some(250));
//! assert!(!tip.tick(100));
//! assert!(tip.tick(250));
//! assert!(tip.is_visible());
//!
//! // Leave at t=400; hidden 250ms later.
//! tip.on_trigger(TriggerEvent::PointerLeave, 400);
//! assert!(tip.tick(650));
//! assert!(!tip.is_visible());
//! ```

use alloc::string::String;

use understory_event_state::key::{Key, KeyEvent};
use understory_timing::{TimerId, TimerQueue};

use crate::id::IdGenerator;
use crate::positioning::Positioning;
use crate::types::{
    Appearance, OnVisibleChangeData, TooltipContent, TooltipProps, TooltipTriggerProps,
    TriggerAriaAttribute, TriggerEvent,
};

/// A visibility change waiting for its delay.
#[derive(Copy, Clone, Debug)]
struct Pending {
    visible: bool,
    cause: TriggerEvent,
}

/// State of one tooltip and its trigger.
#[derive(Debug)]
pub struct Tooltip {
    props: TooltipProps,
    id: String,
    visible: bool,
    timers: TimerQueue<Pending>,
    // At most one change is pending; a new request replaces it.
    pending: Option<TimerId>,
}

/// What the renderer needs for the current pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TooltipState<'a> {
    /// Whether the tooltip is visible.
    pub visible: bool,
    /// Whether the tooltip element must be in the tree.
    ///
    /// A hidden tooltip is still rendered when the trigger references it by id
    /// (`aria-labelledby` / `aria-describedby`) so the reference stays valid.
    pub should_render_tooltip: bool,
    /// Visual variant.
    pub appearance: Appearance,
    /// Render an arrow.
    pub with_arrow: bool,
    /// Content.
    pub content: &'a TooltipContent,
    /// Tooltip element id.
    pub id: &'a str,
    /// Handed to the positioning engine.
    pub positioning: &'a Positioning,
}

impl Tooltip {
    /// Create a tooltip.
    ///
    /// The element id comes from the content props, then [`TooltipProps::id`],
    /// then `ids`.
    pub fn new(props: TooltipProps, ids: &mut IdGenerator) -> Self {
        let id = match props.content.id().or(props.id.as_deref()) {
            Some(id) => String::from(id),
            None => ids.next_id(),
        };
        let visible = props.visible.unwrap_or(false);
        Self {
            props,
            id,
            visible,
            timers: TimerQueue::new(),
            pending: None,
        }
    }

    /// The props the tooltip was created with.
    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// Tooltip element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the tooltip is visible right now.
    pub fn is_visible(&self) -> bool {
        self.props.visible.unwrap_or(self.visible)
    }

    /// Whether the caller controls visibility.
    pub fn is_controlled(&self) -> bool {
        self.props.visible.is_some()
    }

    /// Update the caller-controlled visibility, or hand control back with `None`.
    ///
    /// Handing control back keeps the last controlled value.
    pub fn set_controlled_visible(&mut self, visible: Option<bool>) {
        if let (None, Some(last)) = (visible, self.props.visible) {
            self.visible = last;
        }
        self.props.visible = visible;
    }

    /// Handle an event on the trigger element.
    ///
    /// Returns `true` if visibility changed immediately (zero delay).
    pub fn on_trigger(&mut self, event: TriggerEvent, now: u64) -> bool {
        self.on_trigger_with_show_delay(event, now, self.props.show_delay)
    }

    pub(crate) fn on_trigger_with_show_delay(
        &mut self,
        event: TriggerEvent,
        now: u64,
        show_delay: u64,
    ) -> bool {
        if event.requests_show() {
            if self.is_visible() {
                self.cancel_pending();
                return false;
            }
            self.schedule(true, event, show_delay, now)
        } else {
            if !self.is_visible() {
                self.cancel_pending();
                return false;
            }
            self.schedule(false, event, self.props.hide_delay, now)
        }
    }

    /// The pointer entered the tooltip surface: keep it open.
    pub fn content_pointer_enter(&mut self) {
        self.cancel_pending();
    }

    /// The pointer left the tooltip surface: hide after the hide delay.
    ///
    /// Returns `true` if visibility changed immediately (zero delay).
    pub fn content_pointer_leave(&mut self, now: u64) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.schedule(false, TriggerEvent::PointerLeave, self.props.hide_delay, now)
    }

    /// Handle a key-down anywhere in the document. Escape hides a visible tooltip.
    ///
    /// Returns `true` if visibility changed.
    pub fn key_down(&mut self, event: &KeyEvent) -> bool {
        if event.key != Key::Escape || !self.is_visible() {
            return false;
        }
        self.hide_now()
    }

    /// Show without delay. Returns `true` if visibility changed.
    pub fn show_now(&mut self) -> bool {
        self.cancel_pending();
        self.request(true, None)
    }

    /// Hide without delay. Returns `true` if visibility changed.
    pub fn hide_now(&mut self) -> bool {
        self.cancel_pending();
        self.request(false, None)
    }

    /// Hide for a group that is showing another tooltip.
    ///
    /// A controlled tooltip gets the usual hide request and is then forced
    /// hidden, as if its owner had answered with `Some(false)`.
    pub(crate) fn supersede(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.cancel_pending();
        self.request(false, None);
        if self.is_visible() {
            self.props.visible = Some(false);
        }
        was_visible
    }

    /// Apply pending changes that are due at `now`.
    ///
    /// Returns `true` if visibility changed.
    pub fn tick(&mut self, now: u64) -> bool {
        let before = self.is_visible();
        while let Some((id, pending)) = self.timers.pop_due(now) {
            if self.pending == Some(id) {
                self.pending = None;
            }
            self.request(pending.visible, Some(pending.cause));
        }
        self.is_visible() != before
    }

    /// When [`tick`](Self::tick) should next be called, if anything is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Whether a delayed change is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The linkage actually used: `Label` needs plain-text content and falls
    /// back to `LabelledBy` otherwise.
    pub fn effective_aria_attribute(&self) -> TriggerAriaAttribute {
        match (self.props.trigger_aria_attribute, &self.props.content) {
            (TriggerAriaAttribute::Label, TooltipContent::Props(_)) => {
                TriggerAriaAttribute::LabelledBy
            }
            (attribute, _) => attribute,
        }
    }

    /// ARIA props for the trigger element.
    pub fn trigger_props(&self) -> TooltipTriggerProps {
        let mut props = TooltipTriggerProps::default();
        match self.effective_aria_attribute() {
            TriggerAriaAttribute::Label => {
                props.aria_label = self.props.content.as_text().map(String::from);
            }
            TriggerAriaAttribute::LabelledBy => props.aria_labelledby = Some(self.id.clone()),
            TriggerAriaAttribute::DescribedBy => props.aria_describedby = Some(self.id.clone()),
            TriggerAriaAttribute::None => {}
        }
        props
    }

    /// Render state for the current pass.
    pub fn state(&self) -> TooltipState<'_> {
        let visible = self.is_visible();
        let referenced_by_id = matches!(
            self.effective_aria_attribute(),
            TriggerAriaAttribute::LabelledBy | TriggerAriaAttribute::DescribedBy
        );
        TooltipState {
            visible,
            should_render_tooltip: visible || referenced_by_id,
            appearance: self.props.appearance,
            with_arrow: self.props.with_arrow,
            content: &self.props.content,
            id: &self.id,
            positioning: &self.props.positioning,
        }
    }

    fn schedule(&mut self, visible: bool, cause: TriggerEvent, delay: u64, now: u64) -> bool {
        self.cancel_pending();
        if delay == 0 {
            return self.request(visible, Some(cause));
        }
        self.pending = Some(
            self.timers
                .schedule_after(now, delay, Pending { visible, cause }),
        );
        false
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
    }

    fn request(&mut self, visible: bool, cause: Option<TriggerEvent>) -> bool {
        let current = self.is_visible();
        if visible == current {
            return false;
        }
        if !self.is_controlled() {
            self.visible = visible;
        }
        if let Some(on_visible_change) = self.props.on_visible_change.as_mut() {
            on_visible_change(cause, OnVisibleChangeData { visible });
        }
        self.is_visible() != current
    }
}
