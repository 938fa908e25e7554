// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient spinner element and the single-slot lifecycle around it.

use tracing::debug;

use crate::dom::{Dom, ElementId};

/// Class carried by spinner elements.
pub const SPINNER_CLASS: &str = "spinner";

/// Create a spinner and append it to `container`.
pub fn create_loader<D: Dom>(dom: &mut D, container: ElementId) -> ElementId {
    let spinner = dom.create_element("div");
    dom.add_class(spinner, SPINNER_CLASS);
    dom.append_child(container, spinner);
    spinner
}

/// Detach a spinner. Returns false when it is absent or already detached.
pub fn remove_loader<D: Dom>(dom: &mut D, spinner: Option<ElementId>) -> bool {
    let Some(spinner) = spinner else {
        return false;
    };
    let Some(parent) = dom.parent(spinner) else {
        return false;
    };
    dom.remove_child(parent, spinner)
}

/// Holds at most one active spinner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderSlot {
    current: Option<ElementId>,
}

impl LoaderSlot {
    /// Active spinner, if any.
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    /// Start a spinner in `container` unless one is already active.
    pub fn start<D: Dom>(&mut self, dom: &mut D, container: ElementId) -> bool {
        if self.current.is_some() {
            return false;
        }
        let spinner = create_loader(dom, container);
        debug!(?spinner, "loader started");
        self.current = Some(spinner);
        true
    }

    /// Stop the active spinner. The slot is cleared only when removal works.
    pub fn stop<D: Dom>(&mut self, dom: &mut D) -> bool {
        if self.current.is_none() {
            return false;
        }
        let removed = remove_loader(dom, self.current);
        if removed {
            debug!(spinner = ?self.current, "loader stopped");
            self.current = None;
        }
        removed
    }
}
