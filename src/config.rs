//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! celtic-config.toml file. It holds the observer's location (latitude drives
//! the sunset rollover) and which sections of the almanac view to draw.

use crate::error::AlmanacError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "celtic-config.toml";

/// Application configuration loaded from celtic-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Observer location
    pub location: LocationConfig,
    /// Terminal layout options
    pub display: DisplayConfig,
}

/// Where the almanac is reckoned
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Human-readable place name for the header
    pub name: String,
    /// Geographic latitude in degrees, north positive
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive. Informational only:
    /// sunset is computed in local solar time.
    pub longitude: f64,
}

/// Which boxes to draw and how wide
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Outer width of every box, in terminal columns
    pub box_width: usize,
    pub show_metonic: bool,
    pub show_pleiades: bool,
    pub show_wheel: bool,
    /// Draw the half-month grids of the current lunar month
    pub show_month_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig {
                name: "Coligny, France".to_string(),
                latitude: 46.38,
                longitude: 5.35,
            },
            display: DisplayConfig {
                box_width: 71,
                show_metonic: true,
                show_pleiades: true,
                show_wheel: true,
                show_month_grid: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(location = %config.location.name, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults (Coligny)");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using defaults (Coligny)");
                Self::default()
            }
        }
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), AlmanacError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.location.name, "Coligny, France");
        assert_eq!(config.location.latitude, 46.38);
        assert_eq!(config.display.box_width, 71);
        assert!(config.display.show_month_grid);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_custom_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[location]
name = "Tara, Ireland"
latitude = 53.58
longitude = -6.61

[display]
box_width = 60
show_metonic = false
show_pleiades = true
show_wheel = true
show_month_grid = false
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.location.name, "Tara, Ireland");
        assert_eq!(config.location.latitude, 53.58);
        assert_eq!(config.display.box_width, 60);
        assert!(!config.display.show_metonic);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[location]\nlatitude = \"north\"\n").unwrap();
        assert_eq!(Config::load_from_path(file.path()), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("almanac.toml");

        let mut config = Config::default();
        config.location.latitude = -33.9;
        config.save_to_path(&path).unwrap();

        assert_eq!(Config::load_from_path(&path), config);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("almanac.toml");
        let err = Config::default().save_to_path(&path).unwrap_err();
        assert!(matches!(err, AlmanacError::ConfigIo(_)));
    }
}
