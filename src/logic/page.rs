// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Demo page markup: the element ids the behaviors depend on.

use anyhow::{Result, anyhow};

use crate::dom::{Dom, ElementId};
use crate::logic::form::FormElements;
use crate::logic::modal::ModalElements;
use crate::logic::visual::SHOW_CLASS;

/// Elements the page behaviors act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageElements {
    pub anim_box: ElementId,
    pub flip_card: ElementId,
    pub modal: ModalElements,
    pub loader_area: ElementId,
    pub form: FormElements,
}

const CONTROL_IDS: [&str; 3] = ["btnAnimateBox", "startLoader", "stopLoader"];

fn require<D: Dom>(dom: &D, id: &str) -> Result<ElementId> {
    dom.element_by_id(id)
        .ok_or_else(|| anyhow!("Page markup is missing element #{id}"))
}

impl PageElements {
    /// Resolve the page elements by id.
    ///
    /// # Errors
    ///
    /// Fails naming the first id that is not present in the document.
    pub fn locate<D: Dom>(dom: &D) -> Result<Self> {
        // Trigger buttons only dispatch messages, but they are part of the
        // markup all the same.
        for id in CONTROL_IDS {
            require(dom, id)?;
        }

        Ok(Self {
            anim_box: require(dom, "animBox")?,
            flip_card: require(dom, "flipCard")?,
            modal: ModalElements {
                backdrop: require(dom, "modalBackdrop")?,
                close_button: require(dom, "closeModal")?,
                opener: require(dom, "openModal")?,
            },
            loader_area: require(dom, "loaderArea")?,
            form: FormElements {
                form: require(dom, "demoForm")?,
                name_input: require(dom, "name")?,
                email_input: require(dom, "email")?,
                name_error: require(dom, "nameError")?,
                email_error: require(dom, "emailError")?,
                success: require(dom, "formSuccess")?,
            },
        })
    }
}

fn element<D: Dom>(dom: &mut D, parent: ElementId, tag: &str, id: &str) -> ElementId {
    let el = dom.create_element(tag);
    dom.set_attribute(el, "id", id);
    dom.append_child(parent, el);
    el
}

/// Build the demo page markup into `dom` and return the root element.
///
/// The modal markup ships with `show` set, the same way a hand-written page
/// might; page init is responsible for forcing it closed.
pub fn build_demo_page<D: Dom>(dom: &mut D) -> ElementId {
    let body = dom.create_element("body");

    let anim = element(dom, body, "section", "animSection");
    element(dom, anim, "div", "animBox");
    element(dom, anim, "button", "btnAnimateBox");

    let card = element(dom, body, "div", "flipCard");
    dom.set_attribute(card, "role", "button");
    dom.set_attribute(card, "aria-pressed", "false");

    element(dom, body, "button", "openModal");
    let backdrop = element(dom, body, "div", "modalBackdrop");
    dom.add_class(backdrop, SHOW_CLASS);
    let dialog = element(dom, backdrop, "div", "modalDialog");
    dom.set_attribute(dialog, "role", "dialog");
    element(dom, dialog, "button", "closeModal");

    let loader = element(dom, body, "section", "loaderSection");
    element(dom, loader, "button", "startLoader");
    element(dom, loader, "button", "stopLoader");
    element(dom, loader, "div", "loaderArea");

    let form = element(dom, body, "form", "demoForm");
    element(dom, form, "input", "name");
    element(dom, form, "div", "nameError");
    element(dom, form, "input", "email");
    element(dom, form, "div", "emailError");
    element(dom, form, "div", "formSuccess");

    body
}
