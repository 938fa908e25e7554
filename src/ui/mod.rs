// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the demo page.
//! Handles layout, keyboard routing, timers, and command execution.

pub mod components;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::dom::{Dom, ElementId, Key};
use crate::mvu::{self, Command, Msg, PageModel};
use crate::ui::components::{anim_box, contact_form, flip_card, loader, modal};

/// Peak height of the post-animation bounce, in points.
const BOUNCE_HEIGHT: f32 = 4.0;

/// Stateful egui application rendering the page document.
pub struct PageApp {
    model: PageModel,
    inbox: Vec<Msg>,
    /// Running bounces keyed by element: start time and length.
    bounces: HashMap<ElementId, (Instant, Duration)>,
    /// Document focus as of the previous frame, to detect focus moves.
    last_focus: Option<ElementId>,
}

impl PageApp {
    pub fn new(model: PageModel) -> Self {
        Self {
            model,
            inbox: Vec::new(),
            bounces: HashMap::new(),
            last_focus: None,
        }
    }
}

impl eframe::App for PageApp {
    /// Required by eframe 0.34; all rendering happens in `update`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: fires due timers, applies queued messages,
    /// executes the resulting commands, and renders the page sections.
    /// Messages produced while rendering are handled on the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.inbox.push(Msg::KeyDown(Key::Escape));
        }

        let mut commands = Vec::new();
        mvu::tick(&mut self.model, now, &mut commands);
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg, now, &mut commands);
        }
        for cmd in commands {
            self.run_command(ctx, cmd, now);
        }

        // Only move egui focus when the document focus changed.
        let focused = self.model.dom.focused();
        let focus = if focused != self.last_focus {
            focused
        } else {
            None
        };
        self.last_focus = focused;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Interaction demo");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| self.render_status(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let bounce = self.bounce_offset(self.model.els.anim_box, now);
                section(ui, "Animation", |ui| {
                    self.inbox.extend(anim_box::view(ui, &self.model, bounce));
                });
                section(ui, "Flip card", |ui| {
                    // Applied in this frame so a prevented key is consumed
                    // before the widgets after the card read input.
                    let msgs = flip_card::view(ui, &self.model, focus);
                    self.apply_now(ui.ctx(), msgs, now);
                });
                section(ui, "Modal", |ui| {
                    self.inbox.extend(modal::opener(ui, &self.model, focus));
                });
                section(ui, "Loader", |ui| {
                    self.inbox.extend(loader::view(ui, &self.model));
                });
                section(ui, "Contact form", |ui| {
                    self.inbox.extend(contact_form::view(ui, &self.model));
                });
            });
        });

        self.inbox
            .extend(modal::view(ctx, &self.model, focus));

        self.schedule_repaint(ctx, now);
    }
}

impl PageApp {
    /// Execute a fire-and-forget command from the update step.
    fn run_command(&mut self, ctx: &egui::Context, cmd: Command, now: Instant) {
        match cmd {
            Command::Bounce { element, duration } => {
                self.bounces.insert(element, (now, duration));
            }
            Command::ConsumeKey(key) => {
                ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, host_key(key)));
            }
        }
    }

    /// Run `msgs` through the update step immediately instead of queueing
    /// them for the next frame.
    fn apply_now(&mut self, ctx: &egui::Context, msgs: Vec<Msg>, now: Instant) {
        let mut commands = Vec::new();
        for msg in msgs {
            mvu::update(&mut self.model, msg, now, &mut commands);
        }
        for cmd in commands {
            self.run_command(ctx, cmd, now);
        }
    }

    /// Vertical bounce offset for `element`, dropping finished bounces.
    fn bounce_offset(&mut self, element: ElementId, now: Instant) -> f32 {
        let Some((start, duration)) = self.bounces.get(&element).copied() else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if duration.is_zero() || elapsed >= duration {
            self.bounces.remove(&element);
            return 0.0;
        }
        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        -BOUNCE_HEIGHT * (t * std::f32::consts::PI).sin()
    }

    /// Keep frames coming while messages, bounces, or timers are pending.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if !self.inbox.is_empty() || !self.bounces.is_empty() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.model.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    /// Render a one-line summary of page state.
    fn render_status(&self, ui: &mut egui::Ui) {
        let modal = if self.model.modal().is_open() {
            "open"
        } else {
            "closed"
        };
        let loader = if self.model.loader().current().is_some() {
            "running"
        } else {
            "idle"
        };
        let timers = self.model.pending_timers();
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Modal {modal} · Loader {loader} · {timers} timer(s) pending"
                ))
                .color(egui::Color32::from_gray(110)),
            );
        });
    }
}

fn host_key(key: Key) -> egui::Key {
    match key {
        Key::Enter => egui::Key::Enter,
        Key::Space => egui::Key::Space,
        Key::Escape => egui::Key::Escape,
    }
}

/// Grouped, full-width block with a heading.
fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(title);
        ui.add_space(6.0);
        add_contents(ui);
    });
    ui.add_space(12.0);
}
