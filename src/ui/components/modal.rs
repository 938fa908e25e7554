// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Modal opener button and the modal dialog itself.

use crate::dom::ElementId;
use crate::logic::visual::is_visible;
use crate::mvu::{Msg, PageModel};

/// Render the button that opens the modal.
pub fn opener(ui: &mut egui::Ui, model: &PageModel, focus: Option<ElementId>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let label = format!("{} Open modal", egui_phosphor::regular::APP_WINDOW);
    let response = ui.button(label);
    if focus == Some(model.els.modal.opener) {
        response.request_focus();
    }
    if response.clicked() {
        msgs.push(Msg::OpenModalClicked);
    }
    msgs
}

/// Render the modal over the page while the backdrop is visible.
pub fn view(ctx: &egui::Context, model: &PageModel, focus: Option<ElementId>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let els = model.els.modal;
    if !is_visible(&model.dom, els.backdrop) {
        return msgs;
    }

    let shown = egui::Modal::new(egui::Id::new("demo_modal")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading("Hello!");
        ui.add_space(6.0);
        ui.label("Press Escape, click outside, or use the button to close.");
        ui.add_space(10.0);

        let close = ui.button(format!("{} Close", egui_phosphor::regular::X));
        if focus == Some(els.close_button) {
            close.request_focus();
        }
        if close.clicked() {
            msgs.push(Msg::CloseModalClicked);
        }
    });

    if shown.backdrop_response.clicked() {
        msgs.push(Msg::BackdropClicked(els.backdrop));
    }

    msgs
}
