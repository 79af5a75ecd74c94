//! Manager window configuration
//!
//! Small TOML file under the user config directory holding window geometry
//! and the default log level. Preference data (modules, theme) lives in
//! the key-value store instead; this file only covers shell chrome.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: default_log_level(),
        }
    }
}

impl ManagerConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load configuration from the TOML file or create the default
    pub fn load() -> Result<Self> {
        let config_path = Self::path();

        if !config_path.exists() {
            let config = ManagerConfig::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let config: ManagerConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", config_path))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        info!("Saved config to {:?}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_defaults() {
        let config: ManagerConfig = toml::from_str("window_width = 960.0").unwrap();
        assert_eq!(config.window_width, 960.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: ManagerConfig = toml::from_str("").unwrap();
        assert_eq!(config.window_width, 1280.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ManagerConfig::default();
        config.window_width = 1440.0;
        config.log_level = "debug".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: ManagerConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.window_width, 1440.0);
        assert_eq!(parsed.log_level, "debug");
    }
}
