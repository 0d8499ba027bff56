// ABOUTME: Configuration management for autopilot-onboard
// Handles wizard feature switches, logging and UI preferences

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::onboarding::WizardOptions;

const APP_DIR: &str = ".autopilot-onboard";
const ENV_CONFIRM_SECRETS: &str = "AUTOPILOT_ONBOARD_CONFIRM_SECRETS";

/// Values that parse but cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,

    #[error("wizard.mask_char must be a visible character, got {0:?}")]
    InvisibleMaskChar(char),

    #[error("logging.filter must not be empty")]
    EmptyLogFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Wizard behaviour
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Ask for each password twice and allow show/hide on secret fields
    #[serde(default = "default_true")]
    pub confirm_secrets: bool,

    /// Character drawn for hidden secret characters
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            confirm_secrets: default_true(),
            mask_char: default_mask_char(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Override for the log directory (default: ~/.autopilot-onboard/logs)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Event poll / redraw interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Blink the text cursor on every tick
    #[serde(default = "default_true")]
    pub cursor_blink: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cursor_blink: default_true(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_true() -> bool {
    true
}

fn default_mask_char() -> char {
    '•'
}

fn default_log_filter() -> String {
    "autopilot_onboard=info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let path = Self::get_config_paths().into_iter().find(|p| p.exists());

        let mut config = match path {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(std::env::vars());
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::user_config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(APP_DIR).join("config.toml"));
        }

        // 2. User config (~/.autopilot-onboard/config.toml)
        if let Ok(path) = Self::user_config_path() {
            paths.push(path);
        }

        paths
    }

    /// Get the base application directory
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(APP_DIR))
    }

    /// Get the user config file path
    pub fn user_config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Default log directory, falling back to a relative path without a home dir
    pub fn default_log_dir() -> PathBuf {
        Self::base_dir()
            .map(|base| base.join("logs"))
            .unwrap_or_else(|_| PathBuf::from(APP_DIR).join("logs"))
    }

    /// Effective log directory
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .directory
            .clone()
            .unwrap_or_else(Self::default_log_dir)
    }

    /// Apply `AUTOPILOT_ONBOARD_*` environment overrides
    pub fn apply_env_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if key == ENV_CONFIRM_SECRETS {
                match value.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => self.wizard.confirm_secrets = true,
                    "0" | "false" | "no" | "off" => self.wizard.confirm_secrets = false,
                    other => tracing::warn!("Ignoring {}={}", ENV_CONFIRM_SECRETS, other),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let mask = self.wizard.mask_char;
        if mask.is_whitespace() || mask.is_control() {
            return Err(ConfigError::InvisibleMaskChar(mask));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }

    /// Options handed to the wizard state
    pub fn wizard_options(&self) -> WizardOptions {
        WizardOptions {
            confirm_secrets: self.wizard.confirm_secrets,
            mask_char: self.wizard.mask_char,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            wizard: WizardConfig::default(),
            logging: LoggingConfig::default(),
            ui: UiPreferences::default(),
        }
    }
}
