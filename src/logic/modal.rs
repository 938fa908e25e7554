// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Modal dialog open/close state machine with focus handling.

use tracing::debug;

use crate::dom::{Dom, ElementId, Event, Key, KeyEvent, ListenerId};
use crate::logic::visual::{is_visible, set_visible};

/// Elements the modal works with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalElements {
    /// Backdrop that carries the visibility state and closes on direct clicks.
    pub backdrop: ElementId,
    /// Close button focused while the modal is open.
    pub close_button: ElementId,
    /// Control that opens the modal and gets focus back on close.
    pub opener: ElementId,
}

/// Listener attached by [`open`], held until [`close`] removes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    escape_listener: Option<ListenerId>,
}

impl ModalState {
    /// Key listener currently attached for this modal.
    pub fn escape_listener(&self) -> Option<ListenerId> {
        self.escape_listener
    }

    pub fn is_open(&self) -> bool {
        self.escape_listener.is_some()
    }
}

/// Open the modal. Returns false (and changes nothing) when it is already
/// open, so a listener is never registered twice.
pub fn open<D: Dom>(dom: &mut D, els: &ModalElements, state: &mut ModalState) -> bool {
    if state.escape_listener.is_some() {
        return false;
    }

    set_visible(dom, Some(els.backdrop), true);
    dom.focus(els.close_button);
    state.escape_listener = Some(dom.add_key_listener());
    debug!(listener = ?state.escape_listener, "modal opened");
    true
}

/// Close the modal. Safe to call any number of times.
pub fn close<D: Dom>(dom: &mut D, els: &ModalElements, state: &mut ModalState) {
    set_visible(dom, Some(els.backdrop), false);
    if let Some(listener) = state.escape_listener.take() {
        dom.remove_key_listener(listener);
        debug!(?listener, "modal closed");
    }
    dom.focus(els.opener);
}

/// Listener attached by [`open`]: Escape closes.
pub fn on_modal_key<D: Dom>(
    dom: &mut D,
    els: &ModalElements,
    state: &mut ModalState,
    event: &KeyEvent,
) {
    if event.key == Key::Escape {
        close(dom, els, state);
    }
}

/// Page-wide Escape listener: closes only when the backdrop reads as open.
pub fn on_page_key<D: Dom>(
    dom: &mut D,
    els: &ModalElements,
    state: &mut ModalState,
    event: &KeyEvent,
) {
    if event.key == Key::Escape && is_visible(dom, els.backdrop) {
        close(dom, els, state);
    }
}

/// Backdrop click handler: only a click on the backdrop itself closes.
pub fn on_backdrop_click<D: Dom>(
    dom: &mut D,
    els: &ModalElements,
    state: &mut ModalState,
    event: &Event,
) {
    if event.target == els.backdrop {
        close(dom, els, state);
    }
}
