// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod anim_box;
pub mod contact_form;
pub mod flip_card;
pub mod loader;
pub mod modal;
