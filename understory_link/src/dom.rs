// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of a derived link onto DOM-style attributes.
//!
//! Renderers that speak HTML attributes can apply the result directly.
//! Absent attributes are omitted; boolean presence attributes (`disabled`)
//! only appear when set. `aria-disabled` is always present because assistive
//! technology must see the logical state either way.

use smallvec::SmallVec;

use crate::state::LinkState;
use crate::types::LinkAttributes;

/// Value of a single DOM attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// A string value.
    Str(&'a str),
    /// An integer value.
    Int(i32),
    /// A boolean value, rendered as `"true"` / `"false"`.
    Bool(bool),
}

/// Attributes as `(name, value)` pairs.
pub type DomAttributes<'a> = SmallVec<[(&'static str, AttributeValue<'a>); 4]>;

impl LinkState {
    /// Project the derived attributes in a stable order.
    ///
    /// ```
    /// use understory_link::dom::AttributeValue;
    /// use understory_link::{derive_state, LinkElement, LinkProps};
    ///
    /// let state = derive_state(LinkProps::new(LinkElement::Anchor).href("/home"));
    /// let attrs = state.dom_attributes();
    /// assert_eq!(
    ///     attrs.as_slice(),
    ///     &[
    ///         ("href", AttributeValue::Str("/home")),
    ///         ("tabindex", AttributeValue::Int(0)),
    ///         ("aria-disabled", AttributeValue::Bool(false)),
    ///     ]
    /// );
    /// ```
    pub fn dom_attributes(&self) -> DomAttributes<'_> {
        let mut out = DomAttributes::new();
        match self.attributes() {
            LinkAttributes::Anchor(a) => {
                if let Some(href) = a.href.as_deref() {
                    out.push(("href", AttributeValue::Str(href)));
                }
                if let Some(tab_index) = a.tab_index {
                    out.push(("tabindex", AttributeValue::Int(tab_index)));
                }
                out.push(("aria-disabled", AttributeValue::Bool(self.aria_disabled())));
            }
            LinkAttributes::Button(b) => {
                out.push(("role", AttributeValue::Str(&b.role)));
                out.push(("type", AttributeValue::Str(b.button_type.as_str())));
                out.push(("aria-disabled", AttributeValue::Bool(self.aria_disabled())));
                if b.disabled {
                    out.push(("disabled", AttributeValue::Bool(true)));
                }
            }
        }
        out
    }
}
