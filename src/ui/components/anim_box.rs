// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Animated box with its trigger button.

use crate::dom::Dom;
use crate::logic::animate::ANIMATE_CLASS;
use crate::mvu::{Msg, PageModel};

/// Seconds the box takes to ease into and out of its animated pose.
const EASE_SECONDS: f32 = 0.35;

/// Render the box and the animate button. `bounce` is the current vertical
/// bounce offset in points (zero when idle).
pub fn view(ui: &mut egui::Ui, model: &PageModel, bounce: f32) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let animating = model.dom.has_class(model.els.anim_box, ANIMATE_CLASS);

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 96.0), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let how = ui
                .ctx()
                .animate_bool_with_time(egui::Id::new("anim_box"), animating, EASE_SECONDS);
            let idle = ui.visuals().widgets.inactive.bg_fill;
            let active = ui.visuals().selection.bg_fill;
            let fill = egui::Color32::from_rgba_unmultiplied(
                egui::lerp(idle.r() as f32..=active.r() as f32, how) as u8,
                egui::lerp(idle.g() as f32..=active.g() as f32, how) as u8,
                egui::lerp(idle.b() as f32..=active.b() as f32, how) as u8,
                egui::lerp(idle.a() as f32..=active.a() as f32, how) as u8,
            );
            let lift = egui::lerp(0.0..=-12.0, how) + bounce;
            let side = egui::lerp(64.0..=80.0, how);
            let body = egui::Rect::from_center_size(rect.center(), egui::vec2(side, side))
                .translate(egui::vec2(0.0, lift));
            ui.painter().rect_filled(body, 10.0, fill);
        }

        ui.add_space(12.0);
        let label = format!("{} Animate", egui_phosphor::regular::PLAY);
        if ui.button(label).clicked() {
            msgs.push(Msg::AnimateClicked);
        }
        if animating {
            ui.label(
                egui::RichText::new("animating…")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    });

    msgs
}
