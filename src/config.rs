//! Configuration management for the table demo
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, COLUMN_DEFAULT_SPACING, COLUMN_DEFAULT_WIDTH, COLUMN_MAX_SPACING, COLUMN_MAX_WIDTH,
    COLUMN_MIN_WIDTH, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_EMPTY_TEXT, DEFAULT_LOADING_TEXT,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click headers to sort, rows to select)
    pub mouse_enabled: bool,
    /// Glyph set for sort indicators: "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Table presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Placeholder shown while data is loading
    pub loading_text: String,
    /// Placeholder shown when there are no rows
    pub empty_text: String,
    /// Upper bound on a column's width in cells
    pub max_column_width: u16,
    /// Blank cells between columns
    pub column_spacing: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log records to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            max_column_width: COLUMN_DEFAULT_WIDTH,
            column_spacing: COLUMN_DEFAULT_SPACING,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join(APP_DIR_NAME).join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.table.loading_text.trim().is_empty() {
            anyhow::bail!("loading_text cannot be empty");
        }

        if self.table.empty_text.trim().is_empty() {
            anyhow::bail!("empty_text cannot be empty");
        }

        if !(COLUMN_MIN_WIDTH..=COLUMN_MAX_WIDTH).contains(&self.table.max_column_width) {
            anyhow::bail!(
                "max_column_width must be between {} and {} cells, got {}",
                COLUMN_MIN_WIDTH,
                COLUMN_MAX_WIDTH,
                self.table.max_column_width
            );
        }

        if self.table.column_spacing > COLUMN_MAX_SPACING {
            anyhow::bail!(
                "column_spacing cannot exceed {}, got {}",
                COLUMN_MAX_SPACING,
                self.table.column_spacing
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Data Table Demo Configuration File\n# Generated on {}\n\n",
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
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
