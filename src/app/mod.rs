// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the demo page.

use anyhow::{Context, Result, anyhow};
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::mvu::PageModel;
use crate::ui::PageApp;

/// Build the page and run the main egui event loop until the window closes.
///
/// # Errors
///
/// Fails when the page markup cannot be initialized or the window cannot be
/// created.
pub fn run(config: AppConfig) -> Result<()> {
    let model =
        PageModel::demo(config.timings.clone()).context("Failed to initialize demo page")?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pagefx",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PageApp::new(model)))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the window: {err}"))
}
