// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_link` state derivation.
//!
//! These walk every combination of the two disabled flags for both elements
//! and check attributes and handler behavior together.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_event_state::activate::ActivateEvent;
use understory_event_state::cancel::Cancelable;
use understory_event_state::key::{Key, KeyEvent};
use understory_event_state::propagate::bubble;
use understory_link::{
    ButtonType, LinkAttributes, LinkElement, LinkProps, LinkState, derive_state,
};

const FLAGS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];
const ELEMENTS: [LinkElement; 2] = [LinkElement::Anchor, LinkElement::Button];

/// Log of what the caller's handlers observed.
#[derive(Default)]
struct Seen {
    activations: Vec<Option<Point>>,
    keys: Vec<Key>,
}

fn props(element: LinkElement, disabled: bool, disabled_focusable: bool) -> LinkProps {
    LinkProps::new(element)
        .href("/target")
        .disabled(disabled)
        .disabled_focusable(disabled_focusable)
}

fn recording(
    element: LinkElement,
    disabled: bool,
    disabled_focusable: bool,
) -> (LinkState, Rc<RefCell<Seen>>) {
    let seen = Rc::new(RefCell::new(Seen::default()));
    let on_activate = Rc::clone(&seen);
    let on_key = Rc::clone(&seen);
    let state = derive_state(
        props(element, disabled, disabled_focusable)
            .on_activate(move |ev| on_activate.borrow_mut().activations.push(ev.position))
            .on_key_down(move |ev| on_key.borrow_mut().keys.push(ev.key.clone())),
    );
    (state, seen)
}

#[test]
fn aria_disabled_is_disabled_or_disabled_focusable() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            let state = derive_state(props(element, disabled, disabled_focusable));
            assert_eq!(
                state.aria_disabled(),
                disabled || disabled_focusable,
                "{element:?} disabled={disabled} disabled_focusable={disabled_focusable}"
            );
        }
    }
}

#[test]
fn handlers_swallow_whenever_logically_disabled() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            let mut state = derive_state(props(element, disabled, disabled_focusable));
            assert_eq!(state.disabled(), disabled);
            assert_eq!(
                state.handlers_mut().swallows_activation(),
                disabled || disabled_focusable,
                "{element:?} disabled={disabled} disabled_focusable={disabled_focusable}"
            );
        }
    }
}

#[test]
fn exactly_one_attribute_set_matches_the_element() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            let state = derive_state(props(element, disabled, disabled_focusable));
            assert_eq!(state.element(), element, "attribute set must follow the element");
            assert_eq!(state.attributes().element(), element, "attribute set mismatch");
        }
    }
}

#[test]
fn disabled_anchor_has_no_href() {
    for disabled_focusable in [false, true] {
        let state = derive_state(props(LinkElement::Anchor, true, disabled_focusable));
        let LinkAttributes::Anchor(a) = state.attributes() else {
            panic!("anchor expected");
        };
        assert_eq!(a.href, None, "href must be cleared when disabled");
    }
}

#[test]
fn disabled_anchor_tab_index_depends_on_focusability() {
    let state = derive_state(props(LinkElement::Anchor, true, false));
    let LinkAttributes::Anchor(a) = state.attributes() else {
        panic!("anchor expected");
    };
    assert_eq!(a.tab_index, None, "inert anchor leaves the tab order");
    assert!(!state.is_focusable());

    let state = derive_state(props(LinkElement::Anchor, true, true));
    let LinkAttributes::Anchor(a) = state.attributes() else {
        panic!("anchor expected");
    };
    assert_eq!(a.tab_index, Some(0), "focusable anchor stays tabbable");
    assert!(state.is_focusable());
}

#[test]
fn button_defaults_role_and_type() {
    let state = derive_state(LinkProps::new(LinkElement::Button));
    let LinkAttributes::Button(b) = state.attributes() else {
        panic!("button expected");
    };
    assert_eq!(b.role, "link");
    assert_eq!(b.button_type, ButtonType::Button);
    assert!(!b.disabled);
}

#[test]
fn button_native_disabled_only_when_not_focusable() {
    for (disabled, disabled_focusable) in FLAGS {
        let state = derive_state(props(LinkElement::Button, disabled, disabled_focusable));
        let LinkAttributes::Button(b) = state.attributes() else {
            panic!("button expected");
        };
        assert_eq!(
            b.disabled,
            disabled && !disabled_focusable,
            "disabled={disabled} disabled_focusable={disabled_focusable}"
        );
    }
}

#[test]
fn focusable_disabled_button_is_tabbable_and_announced() {
    let state = derive_state(props(LinkElement::Button, true, true));
    let LinkAttributes::Button(b) = state.attributes() else {
        panic!("button expected");
    };
    assert!(!b.disabled);
    assert!(state.aria_disabled());
    assert!(state.is_focusable());
}

#[test]
fn activation_is_swallowed_while_disabled() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            let (mut state, seen) = recording(element, disabled, disabled_focusable);
            let mut ev = ActivateEvent::at(Point::new(1.0, 2.0));
            state.activate(&mut ev);

            let blocked = disabled || disabled_focusable;
            assert_eq!(ev.is_default_prevented(), blocked, "preventDefault mismatch");
            assert!(!ev.is_propagation_stopped(), "activation never stops propagation");
            let expected = if blocked {
                vec![]
            } else {
                vec![Some(Point::new(1.0, 2.0))]
            };
            assert_eq!(seen.borrow().activations, expected, "handler calls mismatch");
        }
    }
}

#[test]
fn activation_keys_are_swallowed_while_disabled() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            for key in [Key::Enter, Key::Space] {
                let (mut state, seen) = recording(element, disabled, disabled_focusable);
                let mut ev = KeyEvent::new(key.clone());
                state.key_down(&mut ev);

                let blocked = disabled || disabled_focusable;
                assert_eq!(ev.is_default_prevented(), blocked, "preventDefault mismatch");
                assert_eq!(ev.is_propagation_stopped(), blocked, "stopPropagation mismatch");
                let expected = if blocked { vec![] } else { vec![key] };
                assert_eq!(seen.borrow().keys, expected, "handler calls mismatch");
            }
        }
    }
}

#[test]
fn other_keys_always_reach_the_handler() {
    for element in ELEMENTS {
        for (disabled, disabled_focusable) in FLAGS {
            let (mut state, seen) = recording(element, disabled, disabled_focusable);
            let mut ev = KeyEvent::new(Key::from_name("ArrowDown"));
            state.key_down(&mut ev);
            assert!(!ev.is_default_prevented(), "other keys are not canceled");
            assert!(!ev.is_propagation_stopped(), "other keys keep propagating");
            assert_eq!(seen.borrow().keys.len(), 1, "handler called exactly once");
        }
    }
}

#[test]
fn swallowed_enter_never_reaches_ancestors() {
    let (mut state, _) = recording(LinkElement::Anchor, false, true);
    let mut ancestors_seen = Vec::new();
    let mut ev = KeyEvent::new(Key::Enter);

    // Path is root → toolbar → link; the link handler runs first.
    let stopped_at = bubble(&["root", "toolbar", "link"], &mut ev, |node, ev| {
        if *node == "link" {
            state.key_down(ev);
        } else {
            ancestors_seen.push(*node);
        }
    });

    assert_eq!(stopped_at, Some("link"));
    assert!(ancestors_seen.is_empty());
}

#[test]
fn enabled_link_lets_enter_bubble() {
    let (mut state, seen) = recording(LinkElement::Button, false, false);
    let mut ancestors_seen = Vec::new();
    let mut ev = KeyEvent::new(Key::Enter);

    let stopped_at = bubble(&["root", "link"], &mut ev, |node, ev| {
        if *node == "link" {
            state.key_down(ev);
        } else {
            ancestors_seen.push(*node);
        }
    });

    assert_eq!(stopped_at, None);
    assert_eq!(ancestors_seen, vec!["root"]);
    assert_eq!(seen.borrow().keys, vec![Key::Enter]);
}
