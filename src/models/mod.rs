// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure validation helpers shared between UI and page logic.

pub mod contact;
