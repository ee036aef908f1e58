// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output records for link state derivation.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use understory_event_state::activate::ActivateEvent;
use understory_event_state::key::KeyEvent;

/// A caller-supplied event handler.
pub type Handler<E> = Box<dyn FnMut(&mut E)>;

/// The element a link is rendered as.
///
/// This is a closed set: a rendering layer with string tags goes through
/// [`LinkElement::from_tag`] and must decide what to do with anything else
/// before it builds [`LinkProps`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinkElement {
    /// A hyperlink-style element (`<a>`), interactive through `href` and `tabindex`.
    #[default]
    Anchor,
    /// A button-style element (`<button>`), interactive natively.
    Button,
}

impl LinkElement {
    /// Map an HTML tag name to a link element, or `None` for unsupported tags.
    ///
    /// ```
    /// use understory_link::LinkElement;
    ///
    /// assert_eq!(LinkElement::from_tag("a"), Some(LinkElement::Anchor));
    /// assert_eq!(LinkElement::from_tag("button"), Some(LinkElement::Button));
    /// assert_eq!(LinkElement::from_tag("span"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(Self::Anchor),
            "button" => Some(Self::Button),
            _ => None,
        }
    }

    /// The HTML tag name for this element.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Anchor => "a",
            Self::Button => "button",
        }
    }
}

/// The `type` attribute of a button element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    /// Does nothing on its own. Never submits an enclosing form.
    #[default]
    Button,
    /// Submits the enclosing form.
    Submit,
    /// Resets the enclosing form.
    Reset,
}

impl ButtonType {
    /// The attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// What the caller knows about a link before derivation.
///
/// Every field is optional in meaning: the [`Default`] value describes an
/// enabled anchor with no target and no handlers.
#[derive(Default)]
pub struct LinkProps {
    /// Which element the link renders as.
    pub element: LinkElement,
    /// Suppress interaction entirely.
    pub disabled: bool,
    /// Stay focusable and announced, but swallow activation.
    pub disabled_focusable: bool,
    /// Link target. Only used by anchors.
    pub href: Option<String>,
    /// ARIA role. Only used by buttons; defaults to `"link"`.
    pub role: Option<Cow<'static, str>>,
    /// Button type. Only used by buttons; defaults to [`ButtonType::Button`].
    pub button_type: Option<ButtonType>,
    /// Click-equivalent handler.
    pub on_activate: Option<Handler<ActivateEvent>>,
    /// Key-down handler.
    pub on_key_down: Option<Handler<KeyEvent>>,
}

impl LinkProps {
    /// Props for an enabled link rendered as `element`.
    pub fn new(element: LinkElement) -> Self {
        Self {
            element,
            ..Self::default()
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the `disabled` flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the `disabled_focusable` flag.
    #[must_use]
    pub fn disabled_focusable(mut self, disabled_focusable: bool) -> Self {
        self.disabled_focusable = disabled_focusable;
        self
    }

    /// Set an explicit ARIA role.
    #[must_use]
    pub fn role(mut self, role: impl Into<Cow<'static, str>>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set an explicit button type.
    #[must_use]
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    /// Set the activation handler.
    #[must_use]
    pub fn on_activate(mut self, handler: impl FnMut(&mut ActivateEvent) + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    /// Set the key-down handler.
    #[must_use]
    pub fn on_key_down(mut self, handler: impl FnMut(&mut KeyEvent) + 'static) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for LinkProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkProps")
            .field("element", &self.element)
            .field("disabled", &self.disabled)
            .field("disabled_focusable", &self.disabled_focusable)
            .field("href", &self.href)
            .field("role", &self.role)
            .field("button_type", &self.button_type)
            .field("on_activate", &self.on_activate.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

/// Attributes of a link rendered as an anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorAttributes {
    /// Link target; absent when disabled.
    pub href: Option<String>,
    /// Tab order position; absent when the link is not focusable.
    pub tab_index: Option<i32>,
}

/// Attributes of a link rendered as a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonAttributes {
    /// ARIA role.
    pub role: Cow<'static, str>,
    /// Button type.
    pub button_type: ButtonType,
    /// Native `disabled` attribute. Removes the button from the tab order.
    pub disabled: bool,
}

/// The attribute set for the element the link renders as.
///
/// Exactly one set exists per derived link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAttributes {
    /// Anchor attributes.
    Anchor(AnchorAttributes),
    /// Button attributes.
    Button(ButtonAttributes),
}

impl LinkAttributes {
    /// The element these attributes belong to.
    pub const fn element(&self) -> LinkElement {
        match self {
            Self::Anchor(_) => LinkElement::Anchor,
            Self::Button(_) => LinkElement::Button,
        }
    }
}
