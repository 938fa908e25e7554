// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Generic class and visibility helpers shared by the page behaviors.

use crate::dom::{Dom, ElementId};

/// Class marking an element as shown.
pub const SHOW_CLASS: &str = "show";
/// Accessibility attribute mirroring [`SHOW_CLASS`].
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// Flip membership of `class` on `el`.
///
/// Returns whether the class is present afterwards. An absent element or an
/// empty class name is a no-op returning `false`.
pub fn toggle<D: Dom>(dom: &mut D, el: Option<ElementId>, class: &str) -> bool {
    let Some(el) = el else {
        return false;
    };
    if class.is_empty() {
        return false;
    }

    if dom.has_class(el, class) {
        dom.remove_class(el, class);
        false
    } else {
        dom.add_class(el, class);
        true
    }
}

/// Show or hide `el`, writing the class and `aria-hidden` together.
pub fn set_visible<D: Dom>(dom: &mut D, el: Option<ElementId>, show: bool) {
    let Some(el) = el else {
        return;
    };

    if show {
        dom.add_class(el, SHOW_CLASS);
        dom.set_attribute(el, ARIA_HIDDEN, "false");
    } else {
        dom.remove_class(el, SHOW_CLASS);
        dom.set_attribute(el, ARIA_HIDDEN, "true");
    }
}

/// Whether `el` reads as shown by either encoding.
pub fn is_visible<D: Dom>(dom: &D, el: ElementId) -> bool {
    dom.has_class(el, SHOW_CLASS) || dom.attribute(el, ARIA_HIDDEN).as_deref() == Some("false")
}
