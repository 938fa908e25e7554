// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod dom;
mod logic;
mod models;
mod mvu;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    // RUST_LOG overrides; otherwise only warnings and errors.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let config = config::load_config()?;
    app::run(config)
}
