//! Configuration management for actionbar
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    ACTION_SPACING_MAX, ACTION_SPACING_MIN, CONFIG_GENERATED, DEFAULT_MORE_ACTIONS_TITLE, MAX_MEASURE_PASSES,
    RESIZE_DEBOUNCE_MAX_MS, RESIZE_DEBOUNCE_MIN_MS, RESIZE_DEBOUNCE_MS, TERMINAL_ACTION_SPACING,
};
use crate::icons::IconTheme;
use crate::overflow::MeasureOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme for carets and markers
    /// Options: "unicode", "ascii"
    pub icon_theme: IconTheme,
    /// Show the status line under the action bar
    pub show_status_bar: bool,
}

/// Overflow layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns of spacing on each side of an inline action
    pub action_spacing: u16,
    /// Resize debounce window in milliseconds
    pub resize_debounce_ms: u64,
    /// Measurement passes before settling on a disagreeing container width
    pub max_measure_passes: u8,
    /// Title of the group created when actions overflow and no group exists
    pub more_actions_title: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log view
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            show_status_bar: true,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            action_spacing: TERMINAL_ACTION_SPACING,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            max_measure_passes: MAX_MEASURE_PASSES,
            more_actions_title: DEFAULT_MORE_ACTIONS_TITLE.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Measurer options derived from this section
    pub fn measure_options(&self) -> MeasureOptions {
        MeasureOptions {
            spacing: self.action_spacing,
            max_passes: self.max_measure_passes,
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("actionbar.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("actionbar").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;

        if !(ACTION_SPACING_MIN..=ACTION_SPACING_MAX).contains(&layout.action_spacing) {
            anyhow::bail!(
                "action_spacing must be between {} and {} columns, got {}",
                ACTION_SPACING_MIN,
                ACTION_SPACING_MAX,
                layout.action_spacing
            );
        }

        if !(RESIZE_DEBOUNCE_MIN_MS..=RESIZE_DEBOUNCE_MAX_MS).contains(&layout.resize_debounce_ms) {
            anyhow::bail!(
                "resize_debounce_ms must be between {} and {}, got {}",
                RESIZE_DEBOUNCE_MIN_MS,
                RESIZE_DEBOUNCE_MAX_MS,
                layout.resize_debounce_ms
            );
        }

        if !(2..=16).contains(&layout.max_measure_passes) {
            anyhow::bail!(
                "max_measure_passes must be between 2 and 16, got {}",
                layout.max_measure_passes
            );
        }

        if layout.more_actions_title.trim().is_empty() {
            anyhow::bail!("more_actions_title cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# actionbar Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("actionbar"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
