// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Load the optional TOML configuration file.

pub mod model;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

pub use model::{AppConfig, TimingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagefx")
        .join("config.toml")
}

/// Load configuration from the user config directory, falling back to
/// defaults when no file exists.
pub fn load_config() -> Result<AppConfig> {
    load_from(&config_path())
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_from(&tmp.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timings.success_reset_ms, 1400);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[timings]\nanimate_seconds = 0.5\n").unwrap();

        let config = load_from(&path).unwrap();

        assert_eq!(config.timings.animate_seconds, 0.5);
        assert_eq!(config.timings.bounce_ms, 240);
        assert_eq!(config.window, model::WindowConfig::default());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "timings = [").unwrap();

        let err = load_from(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
