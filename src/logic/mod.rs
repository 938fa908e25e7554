// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page behaviors expressed against the [`crate::dom::Dom`] capability set.

pub mod animate;
pub mod flip;
pub mod form;
pub mod loader;
pub mod modal;
pub mod page;
pub mod timers;
pub mod visual;
