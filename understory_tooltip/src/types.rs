// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration and the props handed to the trigger element.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::positioning::Positioning;

/// Default delay before a tooltip is shown, in milliseconds.
pub const DEFAULT_SHOW_DELAY: u64 = 250;

/// Default delay before a tooltip is hidden, in milliseconds.
pub const DEFAULT_HIDE_DELAY: u64 = 250;

/// Visual variant of a tooltip. Carried for the renderer, not interpreted here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    /// The default appearance.
    #[default]
    Normal,
    /// Inverted colors.
    Inverted,
}

/// Which ARIA attribute links the trigger to the tooltip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriggerAriaAttribute {
    /// `aria-label` set to the tooltip text.
    ///
    /// Only possible for plain-text content; other content uses
    /// [`LabelledBy`](Self::LabelledBy) instead.
    #[default]
    Label,
    /// `aria-labelledby` set to the tooltip id.
    LabelledBy,
    /// `aria-describedby` set to the tooltip id.
    DescribedBy,
    /// No linkage.
    None,
}

/// Props for the tooltip content element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentProps {
    /// Element id; generated when absent.
    pub id: Option<String>,
    /// Text rendered inside, if any.
    pub text: Option<String>,
}

/// Tooltip content: either plain text or full content props.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipContent {
    /// Plain text.
    Text(String),
    /// Full props.
    Props(ContentProps),
}

impl Default for TooltipContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for TooltipContent {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for TooltipContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ContentProps> for TooltipContent {
    fn from(props: ContentProps) -> Self {
        Self::Props(props)
    }
}

impl TooltipContent {
    /// The plain text, when the content is [`TooltipContent::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Props(_) => None,
        }
    }

    /// An id carried by the content props, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Props(props) => props.id.as_deref(),
        }
    }
}

/// Something that happened on the trigger element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// The pointer entered the trigger.
    PointerEnter,
    /// The pointer left the trigger.
    PointerLeave,
    /// The trigger received focus.
    Focus,
    /// The trigger lost focus.
    Blur,
}

impl TriggerEvent {
    /// Returns `true` for events that ask for the tooltip to be shown.
    pub const fn requests_show(self) -> bool {
        matches!(self, Self::PointerEnter | Self::Focus)
    }
}

/// Payload of a visibility change notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OnVisibleChangeData {
    /// The requested visibility.
    pub visible: bool,
}

/// Visibility change callback.
///
/// Receives the trigger event that caused the change, or `None` when the
/// change was not caused by the trigger (Escape, explicit show/hide).
pub type VisibleChangeHandler = Box<dyn FnMut(Option<TriggerEvent>, OnVisibleChangeData)>;

/// Tooltip configuration.
pub struct TooltipProps {
    /// Visual variant.
    pub appearance: Appearance,
    /// Content shown in the tooltip.
    pub content: TooltipContent,
    /// Render an arrow pointing at the trigger.
    pub with_arrow: bool,
    /// Caller-controlled visibility. `None` lets the tooltip manage itself.
    pub visible: Option<bool>,
    /// Visibility change notification.
    pub on_visible_change: Option<VisibleChangeHandler>,
    /// Trigger linkage.
    pub trigger_aria_attribute: TriggerAriaAttribute,
    /// Delay before showing, in milliseconds.
    pub show_delay: u64,
    /// Delay before hiding, in milliseconds.
    pub hide_delay: u64,
    /// Handed to the positioning engine.
    pub positioning: Positioning,
    /// Tooltip element id, used when the content props carry none.
    pub id: Option<String>,
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self {
            appearance: Appearance::Normal,
            content: TooltipContent::default(),
            with_arrow: false,
            visible: None,
            on_visible_change: None,
            trigger_aria_attribute: TriggerAriaAttribute::Label,
            show_delay: DEFAULT_SHOW_DELAY,
            hide_delay: DEFAULT_HIDE_DELAY,
            positioning: Positioning::default(),
            id: None,
        }
    }
}

impl TooltipProps {
    /// Props for a tooltip showing `content`, everything else defaulted.
    pub fn new(content: impl Into<TooltipContent>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the appearance.
    #[must_use]
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Render an arrow.
    #[must_use]
    pub fn with_arrow(mut self, with_arrow: bool) -> Self {
        self.with_arrow = with_arrow;
        self
    }

    /// Control visibility from the caller.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Set the visibility change callback.
    #[must_use]
    pub fn on_visible_change(
        mut self,
        handler: impl FnMut(Option<TriggerEvent>, OnVisibleChangeData) + 'static,
    ) -> Self {
        self.on_visible_change = Some(Box::new(handler));
        self
    }

    /// Set the trigger linkage.
    #[must_use]
    pub fn trigger_aria_attribute(mut self, attribute: TriggerAriaAttribute) -> Self {
        self.trigger_aria_attribute = attribute;
        self
    }

    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn show_delay(mut self, delay: u64) -> Self {
        self.show_delay = delay;
        self
    }

    /// Set the hide delay in milliseconds.
    #[must_use]
    pub fn hide_delay(mut self, delay: u64) -> Self {
        self.hide_delay = delay;
        self
    }

    /// Set the positioning handed to the positioning engine.
    #[must_use]
    pub fn positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    /// Set the tooltip element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl fmt::Debug for TooltipProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipProps")
            .field("appearance", &self.appearance)
            .field("content", &self.content)
            .field("with_arrow", &self.with_arrow)
            .field("visible", &self.visible)
            .field("on_visible_change", &self.on_visible_change.is_some())
            .field("trigger_aria_attribute", &self.trigger_aria_attribute)
            .field("show_delay", &self.show_delay)
            .field("hide_delay", &self.hide_delay)
            .field("positioning", &self.positioning)
            .field("id", &self.id)
            .finish()
    }
}

/// ARIA props applied to the trigger element.
///
/// At most one field is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipTriggerProps {
    /// `aria-label`.
    pub aria_label: Option<String>,
    /// `aria-labelledby`.
    pub aria_labelledby: Option<String>,
    /// `aria-describedby`.
    pub aria_describedby: Option<String>,
}
