// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One-shot timed animation applied through a CSS-style class.

use std::time::Duration;

use crate::dom::{Dom, ElementId};

/// Class held on an element while it animates.
pub const ANIMATE_CLASS: &str = "animate";
/// Duration used when the caller has no preference.
#[cfg(test)]
pub const DEFAULT_ANIMATION_SECONDS: f64 = 1.2;
/// Shortest timed animation; anything below would race with style application.
pub const MIN_ANIMATION: Duration = Duration::from_millis(100);

/// Outcome of starting an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    /// Already settled with the given result.
    Settled(bool),
    /// Settles `true` once `delay` elapses and [`finish`] runs for `element`.
    Running { element: ElementId, delay: Duration },
}

/// Start animating `el` for `seconds`.
///
/// The class is added before returning. A positive duration yields
/// [`Animation::Running`] with a delay of at least [`MIN_ANIMATION`]; zero,
/// negative or NaN durations settle `true` at once and leave the class in
/// place ("hold" mode, something else must clear it).
///
/// Overlapping calls on the same element are not coordinated: the first timer
/// to fire removes the class even if a later animation is still running.
pub fn animate<D: Dom>(dom: &mut D, el: Option<ElementId>, seconds: f64) -> Animation {
    let Some(el) = el else {
        return Animation::Settled(false);
    };

    dom.add_class(el, ANIMATE_CLASS);

    if seconds > 0.0 {
        // Whole microseconds; `as` saturates for out-of-range values.
        let requested = Duration::from_micros((seconds * 1_000_000.0).round() as u64);
        Animation::Running {
            element: el,
            delay: requested.max(MIN_ANIMATION),
        }
    } else {
        Animation::Settled(true)
    }
}

/// Complete a running animation: drop the class and report success.
pub fn finish<D: Dom>(dom: &mut D, el: ElementId) -> bool {
    dom.remove_class(el, ANIMATE_CLASS);
    true
}
