// SPDX-License-Identifier: MPL-2.0
//! Persisted toast presentation preferences.
//!
//! Hosts embedding the provider can load and save a `settings.toml` under
//! the platform config directory, or from an explicit path (e.g. for
//! testing). Missing or invalid files fall back to defaults.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//! use iced_toaster::Edge;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.edge = Some(Edge::Bottom);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::provider::Edge;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToaster";

/// Default toast lifetime in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Screen edge the toast stack is anchored to.
    pub edge: Option<Edge>,
    /// Default lifetime for toasts without an explicit duration.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Whether toasts render a decay indicator by default.
    #[serde(default)]
    pub show_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge: Some(Edge::Top),
            duration_ms: Some(DEFAULT_DURATION_MS),
            show_progress: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_edge() {
        let config = Config {
            edge: Some(Edge::Bottom),
            duration_ms: Some(5000),
            show_progress: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.edge, Some(Edge::Bottom));
        assert_eq!(loaded.duration_ms, Some(5000));
        assert_eq!(loaded.show_progress, Some(false));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.edge, Some(Edge::Top));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.edge, Some(Edge::Top));
        assert_eq!(config.duration_ms, Some(DEFAULT_DURATION_MS));
        assert_eq!(config.show_progress, Some(true));
    }
}
