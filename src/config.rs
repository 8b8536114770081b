//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! weather-config.toml file. It selects the starting location, an optional
//! dataset file, and the chart dimensions used by the renderers.

use crate::mock_data::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, relative to the working directory
pub const CONFIG_FILE: &str = "weather-config.toml";

/// Application configuration loaded from weather-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Location and data source settings
    pub dashboard: DashboardConfig,
    /// Display and chart settings
    pub display: DisplayConfig,
}

/// Location and data source configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Location selected at startup
    pub location: String,
    /// JSON dataset to use instead of the built-in mock data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

/// Display and visualization configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Graphics target width in pixels
    pub width: u32,
    /// Graphics target height in pixels
    pub height: u32,
    /// Character columns used for the value axis of the ASCII chart
    pub chart_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dashboard: DashboardConfig {
                location: DEFAULT_LOCATION.to_string(),
                dataset: None,
            },
            display: DisplayConfig {
                width: 400,
                height: 300,
                chart_columns: 48,
            },
        }
    }
}

impl Config {
    /// Load configuration from weather-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        location = %config.dashboard.location,
                        "loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "invalid config file format: {e}");
                    tracing::warn!("using default configuration ({DEFAULT_LOCATION})");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(
                    path = %path.display(),
                    "no config file found, using default configuration"
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to `path`
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        tracing::info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    /// Save current configuration to weather-config.toml
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dashboard.location, "Current Location");
        assert!(config.dashboard.dataset.is_none());
        assert_eq!(config.display.width, 400);
        assert_eq!(config.display.chart_columns, 48);
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r#"
[dashboard]
location = "London"
dataset = "data/weather.json"

[display]
width = 640
height = 384
chart_columns = 60
"#,
        )
        .unwrap();

        let config = Config::load_from_path(temp_file.path());
        assert_eq!(config.dashboard.location, "London");
        assert_eq!(
            config.dashboard.dataset,
            Some(PathBuf::from("data/weather.json"))
        );
        assert_eq!(config.display.height, 384);
        assert_eq!(config.display.chart_columns, 60);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.dashboard.location = "Tokyo".to_string();

        config.save_to_path(temp_file.path()).unwrap();
        let parsed = Config::load_from_path(temp_file.path());
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[dashboard\nlocation = ").unwrap();
        assert_eq!(Config::load_from_path(temp_file.path()), Config::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
    }
}
