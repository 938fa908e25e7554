// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Configuration data model.
//!
//! Every field has a serde default so a partial file still loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timings: TimingConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Durations used by the page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds the animate button keeps the box animating.
    pub animate_seconds: f64,
    /// Length of the bounce played after an animation settles.
    pub bounce_ms: u64,
    /// Delay before the success indicator hides and the form resets.
    pub success_reset_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            animate_seconds: 1.4,
            bounce_ms: 240,
            success_reset_ms: 1400,
        }
    }
}

impl TimingConfig {
    pub fn bounce(&self) -> Duration {
        Duration::from_millis(self.bounce_ms)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 680.0,
        }
    }
}
