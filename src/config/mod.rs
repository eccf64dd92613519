//! Configuration management for FolioTerm
//!
//! This module provides configuration management for FolioTerm: the main
//! `Config` structure with its UI and terminal sections, file loading with
//! fallback to defaults, and the built-in color themes.

pub mod loader;
pub mod theme;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure for FolioTerm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Terminal configuration
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Font family for terminal text
    pub font_family: String,

    /// Font size in points
    pub font_size: u32,

    /// Initial window width in logical pixels
    pub window_width: f32,

    /// Initial window height in logical pixels
    pub window_height: f32,

    /// Terminal color theme name
    pub theme_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: "JetBrains Mono".to_string(),
            font_size: 14,
            window_width: 960.0,
            window_height: 640.0,
            theme_name: "classic-green".to_string(),
        }
    }
}

/// Terminal-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay between the `exit` farewell line and the overlay closing,
    /// in milliseconds
    pub exit_delay_ms: u64,

    /// Maximum number of history entries kept for recall
    pub max_history: usize,

    /// Default terminal overlay width in logical pixels
    pub overlay_width: f32,

    /// Default terminal overlay height in logical pixels
    pub overlay_height: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: 500,
            max_history: 1000,
            overlay_width: 760.0,
            overlay_height: 500.0,
        }
    }
}

impl TerminalConfig {
    /// Exit-close delay as a `Duration`
    pub fn exit_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.exit_delay_ms)
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid font size: {0} (must be between 8 and 72)")]
    InvalidFontSize(u32),

    #[error("Invalid window size: {0}x{1} (minimum 400x300)")]
    InvalidWindowSize(u32, u32),

    #[error("Invalid exit delay: {0}ms (must be between 100 and 5000)")]
    InvalidExitDelay(u64),

    #[error("Invalid history size: {0} (must be between 1 and 10000)")]
    InvalidHistorySize(usize),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl Config {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        self.check().map_err(|e| Error::ConfigValidationFailed {
            field: config_error_field(&e).to_string(),
            reason: e.to_string(),
        })
    }

    fn check(&self) -> std::result::Result<(), ConfigError> {
        if !(8..=72).contains(&self.ui.font_size) {
            return Err(ConfigError::InvalidFontSize(self.ui.font_size));
        }
        if self.ui.window_width < 400.0 || self.ui.window_height < 300.0 {
            return Err(ConfigError::InvalidWindowSize(
                self.ui.window_width as u32,
                self.ui.window_height as u32,
            ));
        }
        if !(100..=5000).contains(&self.terminal.exit_delay_ms) {
            return Err(ConfigError::InvalidExitDelay(self.terminal.exit_delay_ms));
        }
        if !(1..=10_000).contains(&self.terminal.max_history) {
            return Err(ConfigError::InvalidHistorySize(self.terminal.max_history));
        }
        if theme::TerminalTheme::by_name(&self.ui.theme_name).is_none() {
            return Err(ConfigError::UnknownTheme(self.ui.theme_name.clone()));
        }
        Ok(())
    }
}

fn config_error_field(err: &ConfigError) -> &'static str {
    match err {
        ConfigError::InvalidFontSize(_) => "ui.font_size",
        ConfigError::InvalidWindowSize(_, _) => "ui.window_width/window_height",
        ConfigError::InvalidExitDelay(_) => "terminal.exit_delay_ms",
        ConfigError::InvalidHistorySize(_) => "terminal.max_history",
        ConfigError::UnknownTheme(_) => "ui.theme_name",
    }
}
