// src/config.rs

//! Defines the configuration structures for the maze preview.
//!
//! Every struct derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs to name the settings it overrides. Defaults match the
//! values the preview form ships with.

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;

use crate::grid::{GridConfiguration, Preset};

/// Environment variable naming a JSON config file to load at startup.
pub const CONFIG_PATH_ENV: &str = "MAZE_PREVIEW_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Render scheduling settings.
    pub preview: PreviewConfig,
    /// Upper bounds enforced by the validator.
    pub limits: ValidationLimits,
    /// Initial grid, also restored by reset.
    pub defaults: GridDefaults,
    /// Quick size presets offered to the user.
    pub presets: PresetList,
}

impl Config {
    /// Parses a JSON document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse maze preview config")
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Loads the file named by `MAZE_PREVIEW_CONFIG`, or the defaults when the
    /// variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_PATH_ENV) else {
            info!("{} not set, using default configuration", CONFIG_PATH_ENV);
            return Config::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Falling back to default configuration: {:#}", e);
                Config::default()
            }
        }
    }
}

// --- Preview Configuration ---

/// Settings for the auto-preview render scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Quiet period after the last change before an auto-preview render fires.
    pub debounce_ms: u64,
    /// Whether auto-preview starts enabled.
    pub auto_preview: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            debounce_ms: 300,
            auto_preview: true,
        }
    }
}

impl PreviewConfig {
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}

// --- Validation Limits ---

/// Caps applied on top of the positivity rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub max_cell_size: f64,
    pub max_cols: f64,
    pub max_rows: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        ValidationLimits {
            max_cell_size: 200.0,
            max_cols: 400.0,
            max_rows: 400.0,
        }
    }
}

// --- Grid Defaults ---

/// The grid a fresh session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridDefaults {
    pub cell_size: f64,
    pub cols: u32,
    pub rows: u32,
}

impl Default for GridDefaults {
    fn default() -> Self {
        GridDefaults {
            cell_size: 20.0,
            cols: 15,
            rows: 10,
        }
    }
}

impl From<GridDefaults> for GridConfiguration {
    fn from(defaults: GridDefaults) -> Self {
        GridConfiguration {
            cell_size: defaults.cell_size,
            cols: f64::from(defaults.cols),
            rows: f64::from(defaults.rows),
        }
    }
}

// --- Presets ---

/// Ordered list of size presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetList(pub Vec<Preset>);

impl Default for PresetList {
    fn default() -> Self {
        PresetList(vec![
            Preset::new(10, 10),
            Preset::new(20, 15),
            Preset::new(30, 20),
        ])
    }
}

impl PresetList {
    /// Finds a preset by its `"{cols}x{rows}"` label.
    pub fn find(&self, label: &str) -> Option<Preset> {
        self.0.iter().copied().find(|p| p.label() == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.0.iter()
    }
}
