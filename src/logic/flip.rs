// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Card flip driven by click or keyboard activation.

use crate::dom::{Dom, ElementId, Key, KeyEvent};
use crate::logic::visual::toggle;

/// Class present while the card shows its back face.
pub const FLIPPED_CLASS: &str = "flipped";
/// Accessibility attribute mirroring [`FLIPPED_CLASS`].
pub const ARIA_PRESSED: &str = "aria-pressed";

/// Flip the card and return the new state.
pub fn flip<D: Dom>(dom: &mut D, card: Option<ElementId>) -> bool {
    toggle(dom, card, FLIPPED_CLASS)
}

/// Click handler: flip and mirror the state into `aria-pressed`.
pub fn on_click<D: Dom>(dom: &mut D, card: ElementId) -> bool {
    let state = flip(dom, Some(card));
    dom.set_attribute(card, ARIA_PRESSED, &state.to_string());
    state
}

/// Keydown handler. Enter and Space activate the card like a click and
/// suppress the default action; other keys are ignored.
pub fn on_key<D: Dom>(dom: &mut D, card: ElementId, event: &mut KeyEvent) -> Option<bool> {
    match event.key {
        Key::Enter | Key::Space => {
            event.prevent_default();
            Some(on_click(dom, card))
        }
        _ => None,
    }
}
