//! Configuration management for Inventorist
//!
//! This module handles loading, parsing, and validation of configuration
//! files. Every section has serde defaults, so a partial (or absent) config
//! file merges cleanly with the built-in values.

use crate::constants::CONFIG_GENERATED;
use crate::icons::IconTheme;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub alerts: AlertsConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name shown in the dashboard greeting
    pub user_name: String,
    /// Store name shown in the dashboard header
    pub store_name: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: emoji or ascii fallback
    pub icon_theme: IconTheme,
}

/// Stock alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// On-hand quantity at or below which a product counts as low stock
    pub low_stock_threshold: u32,
}

/// Theme configuration: named color tokens plus a border style.
///
/// Colors are `#rrggbb` hex strings or one of the palette names understood
/// by [`crate::utils::color::parse_color`]. Invalid values fail validation
/// at load time rather than rendering unstyled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub navy: String,
    pub slate: String,
    pub cyan: String,
    pub emerald: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub badge_default: String,
    pub badge_success: String,
    pub badge_warning: String,
    pub badge_danger: String,
    pub badge_info: String,
    /// Emphasis applied to content behind a modal: "dim", "bold", or "none"
    pub backdrop_dim: String,
    /// Emphasis for raised surfaces like the selected quick action
    pub raised_bold: String,
    /// Border shape: "rounded", "plain", "thick", or "double"
    pub border: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Log file path
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            user_name: "Manager".to_string(),
            store_name: "Main Street Store".to_string(),
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            navy: "#1e3a5f".to_string(),
            slate: "#64748b".to_string(),
            cyan: "#06b6d4".to_string(),
            emerald: "#10b981".to_string(),
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            text_primary: "#e2e8f0".to_string(),
            text_secondary: "#94a3b8".to_string(),
            badge_default: "#64748b".to_string(),
            badge_success: "#10b981".to_string(),
            badge_warning: "#f59e0b".to_string(),
            badge_danger: "#ef4444".to_string(),
            badge_info: "#06b6d4".to_string(),
            backdrop_dim: "dim".to_string(),
            raised_bold: "bold".to_string(),
            border: "rounded".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: "inventorist.log".to_string(),
        }
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
        let current_dir_config = PathBuf::from("inventorist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("inventorist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.user_name.trim().is_empty() {
            anyhow::bail!("ui.user_name cannot be empty");
        }
        if self.ui.store_name.trim().is_empty() {
            anyhow::bail!("ui.store_name cannot be empty");
        }

        if self.alerts.low_stock_threshold == 0 {
            anyhow::bail!("alerts.low_stock_threshold must be at least 1");
        }
        if self.alerts.low_stock_threshold > 10_000 {
            anyhow::bail!(
                "alerts.low_stock_threshold cannot exceed 10000, got {}",
                self.alerts.low_stock_threshold
            );
        }

        if self.logging.enabled && self.logging.file.trim().is_empty() {
            anyhow::bail!("logging.file cannot be empty when logging is enabled");
        }

        // Resolve the theme so bad color tokens surface here, not at render
        Theme::from_config(&self.theme).context("Invalid [theme] section")?;

        Ok(())
    }

    /// Resolve the configured theme
    pub fn theme(&self) -> Result<Theme> {
        Theme::from_config(&self.theme).context("Invalid [theme] section")
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Inventorist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
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
            .map(|dir| dir.join("inventorist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
