//! Configuration loading.
//!
//! Reads `~/.config/termfolio/config.toml`. Every key is optional; a
//! missing file means defaults, a malformed file is logged and ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// Default contact destination address.
pub const DEFAULT_RECIPIENT: &str = "arularavinth253@gmail.com";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Contact form destination address.
    pub recipient: String,
    /// Color theme.
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            theme: Theme::default(),
        }
    }
}

/// Configuration load failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Path of the config file, if a config directory exists on this platform.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termfolio").join("config.toml"))
}

/// Loads the config file. A missing file yields defaults.
pub fn load() -> Result<AppConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Loads the config file, falling back to defaults on any failure.
#[must_use]
pub fn load_or_default() -> AppConfig {
    match load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring config file: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_portfolio_recipient() {
        let config = AppConfig::default();
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn full_file_overrides_everything() {
        let config: AppConfig =
            toml::from_str("recipient = \"me@example.com\"\ntheme = \"dark\"").unwrap();
        assert_eq!(config.recipient, "me@example.com");
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            recipient: "me@example.com".to_string(),
            theme: Theme::Light,
        };
        let raw = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.recipient, config.recipient);
        assert_eq!(back.theme, config.theme);
    }
}
