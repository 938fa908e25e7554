// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Flip card widget, activated by pointer click or Enter/Space while focused.

use crate::dom::{Dom, ElementId, Key};
use crate::logic::flip::FLIPPED_CLASS;
use crate::mvu::{Msg, PageModel};

/// Draw the card. Returns messages for pointer and keyboard activation.
pub fn view(ui: &mut egui::Ui, model: &PageModel, focus: Option<ElementId>) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let card = model.els.flip_card;
    let flipped = model.dom.has_class(card, FLIPPED_CLASS);

    let (rect, response) = ui.allocate_exact_size(egui::vec2(220.0, 120.0), egui::Sense::click());
    if focus == Some(card) {
        response.request_focus();
    }

    // Keyboard activation is routed separately so egui's synthetic click on
    // Enter/Space does not flip the card twice.
    if response.clicked_by(egui::PointerButton::Primary) {
        msgs.push(Msg::CardClicked);
    } else if response.has_focus() {
        let (enter, space) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Space),
            )
        });
        if enter {
            msgs.push(Msg::CardKey(Key::Enter));
        } else if space {
            msgs.push(Msg::CardKey(Key::Space));
        }
    }

    if ui.is_rect_visible(rect) {
        let how = ui.ctx().animate_bool(response.id, flipped);
        // Squash horizontally through the midpoint to fake a 3D turn.
        let squash = (how * std::f32::consts::PI).cos().abs().max(0.04);
        let face = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(rect.width() * squash, rect.height()),
        );
        let visuals = ui.style().interact_selectable(&response, how > 0.5);
        ui.painter()
            .rect_filled(face.expand(visuals.expansion), 12.0, visuals.bg_fill);
        if response.has_focus() {
            ui.painter().rect_stroke(
                face.expand(2.0),
                12.0,
                ui.visuals().selection.stroke,
                egui::StrokeKind::Outside,
            );
        }
        if squash > 0.3 {
            let text = if how > 0.5 { "Back" } else { "Front" };
            ui.painter().text(
                face.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(20.0),
                visuals.text_color(),
            );
        }
    }

    response.on_hover_text("Click, or focus and press Enter/Space, to flip");
    msgs
}
