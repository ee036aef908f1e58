// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link state derivation.

use alloc::borrow::Cow;

use understory_event_state::activate::ActivateEvent;
use understory_event_state::key::KeyEvent;

use crate::handlers::LinkHandlers;
use crate::types::{AnchorAttributes, ButtonAttributes, LinkAttributes, LinkElement, LinkProps};

/// Default ARIA role for a link rendered as a button.
pub const BUTTON_LINK_ROLE: &str = "link";

/// A link ready to be rendered: final attributes plus composed handlers.
///
/// Build one per render pass with [`derive_state`].
#[derive(Debug)]
pub struct LinkState {
    disabled: bool,
    disabled_focusable: bool,
    attributes: LinkAttributes,
    aria_disabled: bool,
    handlers: LinkHandlers,
}

/// Derive the accessible state of a link from its props.
///
/// - Anchors keep their `href` unless `disabled`, and sit in the tab order
///   (`tabindex=0`) unless `disabled` without `disabled_focusable`.
/// - Buttons get `role="link"` and `type="button"` unless the caller chose
///   otherwise, and are natively disabled only when `disabled` without
///   `disabled_focusable`, so a focusable-but-disabled button stays tabbable.
/// - `aria-disabled` is `disabled || disabled_focusable` for both.
/// - Handlers swallow activation while logically disabled (see [`LinkHandlers`]).
///
/// ```
/// use understory_link::{derive_state, LinkAttributes, LinkElement, LinkProps};
///
/// let state = derive_state(
///     LinkProps::new(LinkElement::Button)
///         .disabled(true)
///         .disabled_focusable(true),
/// );
/// assert!(state.aria_disabled());
/// let LinkAttributes::Button(button) = state.attributes() else { unreachable!() };
/// assert!(!button.disabled);
/// assert_eq!(button.role, "link");
/// ```
pub fn derive_state(props: LinkProps) -> LinkState {
    let LinkProps {
        element,
        disabled,
        disabled_focusable,
        href,
        role,
        button_type,
        on_activate,
        on_key_down,
    } = props;
    let logically_disabled = disabled || disabled_focusable;

    let attributes = match element {
        LinkElement::Anchor => LinkAttributes::Anchor(AnchorAttributes {
            href: if disabled { None } else { href },
            tab_index: if disabled && !disabled_focusable {
                None
            } else {
                Some(0)
            },
        }),
        LinkElement::Button => LinkAttributes::Button(ButtonAttributes {
            role: role
                .filter(|r| !r.is_empty())
                .unwrap_or(Cow::Borrowed(BUTTON_LINK_ROLE)),
            button_type: button_type.unwrap_or_default(),
            disabled: disabled && !disabled_focusable,
        }),
    };

    LinkState {
        disabled,
        disabled_focusable,
        attributes,
        aria_disabled: logically_disabled,
        handlers: LinkHandlers::new(logically_disabled, on_activate, on_key_down),
    }
}

impl LinkState {
    /// The element the link renders as.
    pub fn element(&self) -> LinkElement {
        self.attributes.element()
    }

    /// The `disabled` flag the state was derived from.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The `disabled_focusable` flag the state was derived from.
    pub fn disabled_focusable(&self) -> bool {
        self.disabled_focusable
    }

    /// Element-specific attributes.
    pub fn attributes(&self) -> &LinkAttributes {
        &self.attributes
    }

    /// Value of `aria-disabled`.
    pub fn aria_disabled(&self) -> bool {
        self.aria_disabled
    }

    /// Returns `true` when keyboard focus can reach the link.
    pub fn is_focusable(&self) -> bool {
        match &self.attributes {
            LinkAttributes::Anchor(a) => a.tab_index.is_some(),
            LinkAttributes::Button(b) => !b.disabled,
        }
    }

    /// The composed handlers.
    pub fn handlers_mut(&mut self) -> &mut LinkHandlers {
        &mut self.handlers
    }

    /// Shorthand for [`LinkHandlers::activate`].
    pub fn activate(&mut self, event: &mut ActivateEvent) {
        self.handlers.activate(event);
    }

    /// Shorthand for [`LinkHandlers::key_down`].
    pub fn key_down(&mut self, event: &mut KeyEvent) {
        self.handlers.key_down(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonType;

    fn anchor(state: &LinkState) -> &AnchorAttributes {
        match state.attributes() {
            LinkAttributes::Anchor(a) => a,
            LinkAttributes::Button(_) => panic!("expected anchor attributes"),
        }
    }

    fn button(state: &LinkState) -> &ButtonAttributes {
        match state.attributes() {
            LinkAttributes::Button(b) => b,
            LinkAttributes::Anchor(_) => panic!("expected button attributes"),
        }
    }

    #[test]
    fn enabled_anchor_keeps_href_and_is_tabbable() {
        let s = derive_state(LinkProps::new(LinkElement::Anchor).href("/docs"));
        assert_eq!(anchor(&s).href.as_deref(), Some("/docs"));
        assert_eq!(anchor(&s).tab_index, Some(0));
        assert!(!s.aria_disabled());
        assert!(s.is_focusable());
    }

    #[test]
    fn anchor_without_href_is_still_tabbable() {
        let s = derive_state(LinkProps::new(LinkElement::Anchor));
        assert_eq!(anchor(&s).href, None);
        assert_eq!(anchor(&s).tab_index, Some(0));
    }

    #[test]
    fn disabled_focusable_anchor_keeps_href() {
        // Only `disabled` clears the target; `disabled_focusable` relies on the handlers.
        let s = derive_state(
            LinkProps::new(LinkElement::Anchor)
                .href("/x")
                .disabled_focusable(true),
        );
        assert_eq!(anchor(&s).href.as_deref(), Some("/x"));
        assert_eq!(anchor(&s).tab_index, Some(0));
        assert!(s.aria_disabled());
    }

    #[test]
    fn empty_role_falls_back_to_link() {
        let s = derive_state(LinkProps::new(LinkElement::Button).role(""));
        assert_eq!(button(&s).role, BUTTON_LINK_ROLE);
    }

    #[test]
    fn explicit_role_and_type_are_kept() {
        let s = derive_state(
            LinkProps::new(LinkElement::Button)
                .role("menuitem")
                .button_type(ButtonType::Submit),
        );
        assert_eq!(button(&s).role, "menuitem");
        assert_eq!(button(&s).button_type, ButtonType::Submit);
    }

    #[test]
    fn button_ignores_href() {
        let s = derive_state(LinkProps::new(LinkElement::Button).href("/ignored"));
        assert_eq!(s.element(), LinkElement::Button);
        assert!(matches!(s.attributes(), LinkAttributes::Button(_)));
    }

    #[test]
    fn natively_disabled_button_is_not_focusable() {
        let s = derive_state(LinkProps::new(LinkElement::Button).disabled(true));
        assert!(button(&s).disabled);
        assert!(!s.is_focusable());
        assert!(s.disabled());
        assert!(!s.disabled_focusable());
    }
}
