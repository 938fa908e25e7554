// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring page state, messages, and commands.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info};

use crate::config::TimingConfig;
use crate::dom::{Dom, ElementId, Event, Key, KeyEvent, ListenerId, MemoryDom};
use crate::logic::animate::{self, Animation};
use crate::logic::flip;
use crate::logic::form::{self, SubmitOutcome, VALUE_ATTR};
use crate::logic::loader::LoaderSlot;
use crate::logic::modal::{self, ModalState};
use crate::logic::page::{PageElements, build_demo_page};
use crate::logic::timers::TimerQueue;
use crate::logic::visual::set_visible;

/// Deferred work owned by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// A running animation on `element` has reached its end.
    AnimationEnd { element: ElementId },
    /// The success indicator should hide and the form reset.
    FormReset,
}

/// Page state: the document plus the handles that outlive a single handler.
pub struct PageModel<D: Dom = MemoryDom> {
    /// Document the page renders from.
    pub dom: D,
    /// Resolved markup.
    pub els: PageElements,
    timings: TimingConfig,
    timers: TimerQueue<Timer>,
    loader: LoaderSlot,
    modal: ModalState,
    page_escape: ListenerId,
}

impl PageModel<MemoryDom> {
    /// Build the demo markup into a fresh document and initialize the page.
    pub fn demo(timings: TimingConfig) -> Result<Self> {
        let mut dom = MemoryDom::new();
        build_demo_page(&mut dom);
        Self::new(dom, timings)
    }
}

impl<D: Dom> PageModel<D> {
    /// Initialize the page on an existing document.
    ///
    /// Registers the page-wide Escape listener and forces the modal closed
    /// whatever the markup says.
    ///
    /// # Errors
    ///
    /// Fails when the document lacks one of the page element ids.
    pub fn new(mut dom: D, timings: TimingConfig) -> Result<Self> {
        let els = PageElements::locate(&dom)?;
        let page_escape = dom.add_key_listener();
        set_visible(&mut dom, Some(els.modal.backdrop), false);
        info!("page initialized");

        Ok(Self {
            dom,
            els,
            timings,
            timers: TimerQueue::default(),
            loader: LoaderSlot::default(),
            modal: ModalState::default(),
            page_escape,
        })
    }

    pub fn loader(&self) -> &LoaderSlot {
        &self.loader
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Earliest pending timer deadline, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

/// Page messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    AnimateClicked,
    CardClicked,
    CardKey(Key),
    OpenModalClicked,
    CloseModalClicked,
    /// Click that landed on the backdrop area; carries the hit element.
    BackdropClicked(ElementId),
    /// Keydown observed at document level.
    KeyDown(Key),
    StartLoaderClicked,
    StopLoaderClicked,
    NameChanged(String),
    EmailChanged(String),
    SubmitClicked,
}

/// Commands represent fire-and-forget effects executed by the view layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a short bounce on `element`.
    Bounce {
        element: ElementId,
        duration: Duration,
    },
    /// The page prevented the default action of `key`; the host must not
    /// handle it any further this frame.
    ConsumeKey(Key),
}

/// Update the page model and enqueue commands.
pub fn update<D: Dom>(
    model: &mut PageModel<D>,
    msg: Msg,
    now: Instant,
    cmds: &mut Vec<Command>,
) {
    match msg {
        Msg::AnimateClicked => {
            let target = model.els.anim_box;
            match animate::animate(&mut model.dom, Some(target), model.timings.animate_seconds) {
                Animation::Running { element, delay } => {
                    model
                        .timers
                        .schedule(now, delay, Timer::AnimationEnd { element });
                }
                Animation::Settled(true) => cmds.push(bounce(model, target)),
                Animation::Settled(false) => {}
            }
        }
        Msg::CardClicked => {
            flip::on_click(&mut model.dom, model.els.flip_card);
        }
        Msg::CardKey(key) => {
            let mut event = KeyEvent::new(key);
            flip::on_key(&mut model.dom, model.els.flip_card, &mut event);
            if event.default_prevented() {
                cmds.push(Command::ConsumeKey(key));
            }
        }
        Msg::OpenModalClicked => {
            modal::open(&mut model.dom, &model.els.modal, &mut model.modal);
        }
        Msg::CloseModalClicked => {
            modal::close(&mut model.dom, &model.els.modal, &mut model.modal);
        }
        Msg::BackdropClicked(target) => {
            let event = Event::new(target);
            modal::on_backdrop_click(&mut model.dom, &model.els.modal, &mut model.modal, &event);
        }
        Msg::KeyDown(key) => dispatch_key(model, key),
        Msg::StartLoaderClicked => {
            model.loader.start(&mut model.dom, model.els.loader_area);
        }
        Msg::StopLoaderClicked => {
            model.loader.stop(&mut model.dom);
        }
        Msg::NameChanged(value) => {
            model
                .dom
                .set_attribute(model.els.form.name_input, VALUE_ATTR, &value);
        }
        Msg::EmailChanged(value) => {
            model
                .dom
                .set_attribute(model.els.form.email_input, VALUE_ATTR, &value);
        }
        Msg::SubmitClicked => {
            let mut event = Event::new(model.els.form.form);
            if form::submit(&mut model.dom, &model.els.form, &mut event) == SubmitOutcome::Accepted
            {
                model
                    .timers
                    .schedule(now, model.timings.success_reset(), Timer::FormReset);
            }
        }
    }
}

/// Fire every timer due at `now`.
pub fn tick<D: Dom>(model: &mut PageModel<D>, now: Instant, cmds: &mut Vec<Command>) {
    if model.timers.is_empty() {
        return;
    }
    for timer in model.timers.take_due(now) {
        debug!(?timer, "timer fired");
        match timer {
            Timer::AnimationEnd { element } => {
                if animate::finish(&mut model.dom, element) {
                    cmds.push(bounce(model, element));
                }
            }
            Timer::FormReset => form::finish_success(&mut model.dom, &model.els.form),
        }
    }
}

fn bounce<D: Dom>(model: &PageModel<D>, element: ElementId) -> Command {
    Command::Bounce {
        element,
        duration: model.timings.bounce(),
    }
}

/// Deliver a keydown to the document listeners registered at dispatch time.
/// A listener removed by an earlier one in the same dispatch is skipped.
fn dispatch_key<D: Dom>(model: &mut PageModel<D>, key: Key) {
    let event = KeyEvent::new(key);
    for listener in model.dom.key_listeners() {
        if listener == model.page_escape {
            modal::on_page_key(&mut model.dom, &model.els.modal, &mut model.modal, &event);
        } else if model.modal.escape_listener() == Some(listener) {
            modal::on_modal_key(&mut model.dom, &model.els.modal, &mut model.modal, &event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::animate::ANIMATE_CLASS;
    use crate::logic::flip::{ARIA_PRESSED, FLIPPED_CLASS};
    use crate::logic::visual::{ARIA_HIDDEN, SHOW_CLASS};

    fn page() -> PageModel {
        PageModel::demo(TimingConfig::default()).expect("demo page")
    }

    fn send(model: &mut PageModel, msg: Msg, now: Instant) -> Vec<Command> {
        let mut cmds = Vec::new();
        update(model, msg, now, &mut cmds);
        cmds
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn init_forces_modal_closed() {
        let model = page();
        let backdrop = model.els.modal.backdrop;

        assert!(!model.dom.has_class(backdrop, SHOW_CLASS));
        assert_eq!(model.dom.attribute(backdrop, ARIA_HIDDEN).as_deref(), Some("true"));
        assert_eq!(model.dom.key_listeners().len(), 1);
    }

    #[test]
    fn init_fails_on_incomplete_markup() {
        let mut dom = MemoryDom::new();
        dom.create_element("body");

        assert!(PageModel::new(dom, TimingConfig::default()).is_err());
    }

    #[test]
    fn animate_button_bounces_after_timer() {
        let mut model = page();
        let t0 = Instant::now();
        let anim_box = model.els.anim_box;

        let cmds = send(&mut model, Msg::AnimateClicked, t0);
        assert!(cmds.is_empty());
        assert!(model.dom.has_class(anim_box, ANIMATE_CLASS));
        assert_eq!(model.next_deadline(), Some(t0 + ms(1400)));

        let mut cmds = Vec::new();
        tick(&mut model, t0 + ms(1399), &mut cmds);
        assert!(cmds.is_empty());

        tick(&mut model, t0 + ms(1400), &mut cmds);
        assert!(!model.dom.has_class(anim_box, ANIMATE_CLASS));
        assert_eq!(
            cmds,
            vec![Command::Bounce {
                element: anim_box,
                duration: ms(240)
            }]
        );
    }

    #[test]
    fn hold_duration_bounces_immediately() {
        let timings = TimingConfig {
            animate_seconds: 0.0,
            ..TimingConfig::default()
        };
        let mut model = PageModel::demo(timings).unwrap();

        let cmds = send(&mut model, Msg::AnimateClicked, Instant::now());

        assert_eq!(cmds.len(), 1);
        assert_eq!(model.pending_timers(), 0);
        assert!(model.dom.has_class(model.els.anim_box, ANIMATE_CLASS));
    }

    #[test]
    fn card_click_and_keys_flip() {
        let mut model = page();
        let card = model.els.flip_card;
        let t0 = Instant::now();

        send(&mut model, Msg::CardClicked, t0);
        assert!(model.dom.has_class(card, FLIPPED_CLASS));
        assert_eq!(model.dom.attribute(card, ARIA_PRESSED).as_deref(), Some("true"));

        send(&mut model, Msg::CardKey(Key::Space), t0);
        assert!(!model.dom.has_class(card, FLIPPED_CLASS));
        assert_eq!(model.dom.attribute(card, ARIA_PRESSED).as_deref(), Some("false"));

        send(&mut model, Msg::CardKey(Key::Escape), t0);
        assert!(!model.dom.has_class(card, FLIPPED_CLASS));
    }

    #[test]
    fn card_activation_keys_are_consumed() {
        let mut model = page();
        let t0 = Instant::now();

        let cmds = send(&mut model, Msg::CardKey(Key::Space), t0);
        assert_eq!(cmds, vec![Command::ConsumeKey(Key::Space)]);

        let cmds = send(&mut model, Msg::CardKey(Key::Enter), t0);
        assert_eq!(cmds, vec![Command::ConsumeKey(Key::Enter)]);

        let cmds = send(&mut model, Msg::CardKey(Key::Escape), t0);
        assert!(cmds.is_empty());
        assert!(send(&mut model, Msg::CardClicked, t0).is_empty());
    }

    #[test]
    fn modal_open_close_focus_cycle() {
        let mut model = page();
        let els = model.els.modal;
        let t0 = Instant::now();

        send(&mut model, Msg::OpenModalClicked, t0);
        assert_eq!(model.dom.attribute(els.backdrop, ARIA_HIDDEN).as_deref(), Some("false"));
        assert_eq!(model.dom.focused(), Some(els.close_button));
        assert!(model.modal().is_open());

        send(&mut model, Msg::CloseModalClicked, t0);
        send(&mut model, Msg::CloseModalClicked, t0);
        assert_eq!(model.dom.attribute(els.backdrop, ARIA_HIDDEN).as_deref(), Some("true"));
        assert_eq!(model.dom.focused(), Some(els.opener));
        assert_eq!(model.dom.key_listeners().len(), 1, "only page listener left");
    }

    #[test]
    fn escape_closes_modal_once_both_listeners_run() {
        let mut model = page();
        let t0 = Instant::now();
        send(&mut model, Msg::OpenModalClicked, t0);
        assert_eq!(model.dom.key_listeners().len(), 2);

        send(&mut model, Msg::KeyDown(Key::Escape), t0);

        assert!(!model.modal().is_open());
        assert!(!model.dom.has_class(model.els.modal.backdrop, SHOW_CLASS));
        assert_eq!(model.dom.key_listeners().len(), 1);
    }

    #[test]
    fn other_keys_leave_modal_open() {
        let mut model = page();
        let t0 = Instant::now();
        send(&mut model, Msg::OpenModalClicked, t0);

        send(&mut model, Msg::KeyDown(Key::Enter), t0);

        assert!(model.modal().is_open());
    }

    #[test]
    fn backdrop_click_targets() {
        let mut model = page();
        let els = model.els.modal;
        let t0 = Instant::now();
        send(&mut model, Msg::OpenModalClicked, t0);

        send(&mut model, Msg::BackdropClicked(els.close_button), t0);
        assert!(model.modal().is_open());

        send(&mut model, Msg::BackdropClicked(els.backdrop), t0);
        assert!(!model.modal().is_open());
    }

    #[test]
    fn loader_buttons_manage_single_spinner() {
        let mut model = page();
        let area = model.els.loader_area;
        let t0 = Instant::now();

        send(&mut model, Msg::StartLoaderClicked, t0);
        let first = model.loader().current();
        send(&mut model, Msg::StartLoaderClicked, t0);
        assert_eq!(model.loader().current(), first);
        assert_eq!(model.dom.children(area).len(), 1);

        send(&mut model, Msg::StopLoaderClicked, t0);
        send(&mut model, Msg::StopLoaderClicked, t0);
        assert_eq!(model.loader().current(), None);
        assert!(model.dom.children(area).is_empty());
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let mut model = page();
        let f = model.els.form;
        let t0 = Instant::now();

        send(&mut model, Msg::NameChanged("Jo".into()), t0);
        send(&mut model, Msg::EmailChanged("bad".into()), t0);
        send(&mut model, Msg::SubmitClicked, t0);

        assert_eq!(model.dom.text(f.name_error), "");
        assert_eq!(model.dom.text(f.email_error), "Invalid email format.");
        assert!(!model.dom.has_class(f.success, SHOW_CLASS));
        assert_eq!(model.pending_timers(), 0);
        assert_eq!(model.dom.attribute(f.name_input, VALUE_ATTR).as_deref(), Some("Jo"));
    }

    #[test]
    fn accepted_submit_resets_after_delay() {
        let mut model = page();
        let f = model.els.form;
        let t0 = Instant::now();

        send(&mut model, Msg::NameChanged("Ana".into()), t0);
        send(&mut model, Msg::EmailChanged("ana@example.com".into()), t0);
        send(&mut model, Msg::SubmitClicked, t0);

        assert_eq!(model.dom.text(f.name_error), "");
        assert_eq!(model.dom.text(f.email_error), "");
        assert!(model.dom.has_class(f.success, SHOW_CLASS));

        let mut cmds = Vec::new();
        tick(&mut model, t0 + ms(1399), &mut cmds);
        assert!(model.dom.has_class(f.success, SHOW_CLASS));

        tick(&mut model, t0 + ms(1400), &mut cmds);
        assert!(!model.dom.has_class(f.success, SHOW_CLASS));
        assert_eq!(model.dom.attribute(f.name_input, VALUE_ATTR).as_deref(), Some(""));
        assert_eq!(model.dom.attribute(f.email_input, VALUE_ATTR).as_deref(), Some(""));
        assert!(cmds.is_empty());
    }
}
