// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form submission: validation, inline errors, and success feedback.

use tracing::debug;

use crate::dom::{Dom, ElementId, Event};
use crate::logic::visual::SHOW_CLASS;
use crate::models::contact::{validate_email, validate_name};

/// Attribute holding an input's current value.
pub const VALUE_ATTR: &str = "value";

/// Elements making up the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormElements {
    pub form: ElementId,
    pub name_input: ElementId,
    pub email_input: ElementId,
    pub name_error: ElementId,
    pub email_error: ElementId,
    pub success: ElementId,
}

impl FormElements {
    fn inputs(&self) -> [ElementId; 2] {
        [self.name_input, self.email_input]
    }
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields valid; the success indicator is showing and the caller
    /// should schedule [`finish_success`].
    Accepted,
    /// At least one field failed; fields stay populated.
    Rejected,
}

/// Handle a submit event.
///
/// Always prevents the default submission and rewrites both error slots so a
/// previously reported error never lingers.
pub fn submit<D: Dom>(dom: &mut D, els: &FormElements, event: &mut Event) -> SubmitOutcome {
    event.prevent_default();

    let name = dom.attribute(els.name_input, VALUE_ATTR).unwrap_or_default();
    let email = dom.attribute(els.email_input, VALUE_ATTR).unwrap_or_default();

    let name_err = validate_name(&name);
    let email_err = validate_email(&email);

    dom.set_text(
        els.name_error,
        &name_err.map(|e| e.to_string()).unwrap_or_default(),
    );
    dom.set_text(
        els.email_error,
        &email_err.map(|e| e.to_string()).unwrap_or_default(),
    );

    if name_err.is_none() && email_err.is_none() {
        dom.add_class(els.success, SHOW_CLASS);
        debug!("form accepted");
        SubmitOutcome::Accepted
    } else {
        debug!(?name_err, ?email_err, "form rejected");
        SubmitOutcome::Rejected
    }
}

/// Hide the success indicator and clear every input.
pub fn finish_success<D: Dom>(dom: &mut D, els: &FormElements) {
    dom.remove_class(els.success, SHOW_CLASS);
    for input in els.inputs() {
        dom.set_attribute(input, VALUE_ATTR, "");
    }
}
