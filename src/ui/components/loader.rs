// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Loader start/stop controls and the spinner area.

use crate::dom::Dom;
use crate::logic::loader::SPINNER_CLASS;
use crate::mvu::{Msg, PageModel};

pub fn view(ui: &mut egui::Ui, model: &PageModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Start loader", egui_phosphor::regular::PLAY))
            .clicked()
        {
            msgs.push(Msg::StartLoaderClicked);
        }
        if ui
            .button(format!("{} Stop loader", egui_phosphor::regular::STOP))
            .clicked()
        {
            msgs.push(Msg::StopLoaderClicked);
        }

        ui.add_space(12.0);
        let spinners = model
            .dom
            .children(model.els.loader_area)
            .into_iter()
            .filter(|el| model.dom.has_class(*el, SPINNER_CLASS));
        for _ in spinners {
            ui.add(egui::Spinner::new().size(20.0))
                .on_hover_text("Loading…");
        }
    });

    msgs
}
