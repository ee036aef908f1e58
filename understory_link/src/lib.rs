// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Link: accessible state for links rendered as anchors or buttons.
//!
//! ## Overview
//!
//! A link can be rendered as an `<a>` or as a `<button>`. Either way it must
//! behave like a link for pointer, keyboard, and assistive-technology users,
//! including while disabled. This crate turns what the caller knows
//! ([`LinkProps`]) into what the renderer applies ([`LinkState`]) with a
//! single call to [`derive_state`].
//!
//! ## Disabled states
//!
//! Two flags cooperate:
//!
//! - `disabled`: the link is inert. Anchors lose their `href` and leave the tab
//!   order; buttons get the native `disabled` attribute.
//! - `disabled_focusable`: the link is inert but stays focusable, so keyboard
//!   and screen-reader users can still discover it (and, for example, a
//!   tooltip explaining why it is disabled).
//!
//! In both cases `aria-disabled` is set and the composed [`LinkHandlers`]
//! swallow activation, including Enter and Space.
//!
//! ## Workflow
//!
//! 1) Build [`LinkProps`] from caller configuration and the element to render.
//! 2) Call [`derive_state`] once per render pass.
//! 3) Apply [`LinkState::attributes`] (or [`LinkState::dom_attributes`]) to the element.
//! 4) Route activation and key-down events through [`LinkState::activate`] and
//!    [`LinkState::key_down`], then honor the event's cancelation flags.
//!
//! ```
//! use understory_event_state::activate::ActivateEvent;
//! use understory_event_state::cancel::Cancelable;
//! use understory_event_state::key::{Key, KeyEvent};
//! use understory_link::{derive_state, LinkElement, LinkProps};
//!
//! let mut state = derive_state(
//!     LinkProps::new(LinkElement::Anchor)
//!         .href("https://example.com")
//!         .disabled_focusable(true)
//!         .on_activate(|_| panic!("a disabled link must not activate")),
//! );
//!
//! // Still tabbable, announced as disabled.
//! assert!(state.is_focusable());
//! assert!(state.aria_disabled());
//!
//! // Clicks do nothing and the host must skip navigation.
//! let mut click = ActivateEvent::new();
//! state.activate(&mut click);
//! assert!(click.is_default_prevented());
//!
//! // Enter is swallowed before any ancestor sees it.
//! let mut enter = KeyEvent::new(Key::Enter);
//! state.key_down(&mut enter);
//! assert!(enter.is_propagation_stopped());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dom;
mod handlers;
mod state;
mod types;

pub use handlers::LinkHandlers;
pub use state::{BUTTON_LINK_ROLE, LinkState, derive_state};
pub use types::{
    AnchorAttributes, ButtonAttributes, ButtonType, Handler, LinkAttributes, LinkElement,
    LinkProps,
};
