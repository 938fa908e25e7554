// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Two-field contact form with inline errors and a success banner.

use crate::dom::{Dom, ElementId};
use crate::logic::form::VALUE_ATTR;
use crate::logic::visual::SHOW_CLASS;
use crate::mvu::{Msg, PageModel};

/// Render the form and return messages for edits and submission.
pub fn view(ui: &mut egui::Ui, model: &PageModel) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let els = model.els.form;

    egui::Grid::new("contact_form")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 6.0))
        .min_col_width(80.0)
        .show(ui, |ui| {
            ui.label("Name");
            if let Some(value) = text_input(ui, model, els.name_input, "e.g., Ana", &mut msgs) {
                msgs.push(Msg::NameChanged(value));
            }
            ui.end_row();

            ui.label("");
            error_label(ui, model, els.name_error);
            ui.end_row();

            ui.label("Email");
            if let Some(value) =
                text_input(ui, model, els.email_input, "e.g., ana@example.com", &mut msgs)
            {
                msgs.push(Msg::EmailChanged(value));
            }
            ui.end_row();

            ui.label("");
            error_label(ui, model, els.email_error);
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Send", egui_phosphor::regular::PAPER_PLANE_TILT))
            .clicked()
        {
            msgs.push(Msg::SubmitClicked);
        }
        if model.dom.has_class(els.success, SHOW_CLASS) {
            ui.label(
                egui::RichText::new(format!(
                    "{} Sent successfully!",
                    egui_phosphor::regular::CHECK_CIRCLE
                ))
                .color(egui::Color32::from_rgb(46, 160, 67)),
            );
        }
    });

    msgs
}

/// Single-line input bound to an element's value. Returns the new value on
/// edit; Enter submits the form.
fn text_input(
    ui: &mut egui::Ui,
    model: &PageModel,
    input: ElementId,
    hint: &str,
    msgs: &mut Vec<Msg>,
) -> Option<String> {
    let mut value = model.dom.attribute(input, VALUE_ATTR).unwrap_or_default();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .hint_text(hint)
            .desired_width(240.0),
    );

    if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(Msg::SubmitClicked);
    }

    response.changed().then_some(value)
}

fn error_label(ui: &mut egui::Ui, model: &PageModel, slot: ElementId) {
    let text = model.dom.text(slot);
    ui.label(
        egui::RichText::new(text)
            .small()
            .color(ui.visuals().error_fg_color),
    );
}
