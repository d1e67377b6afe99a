//! Configuration module for placefinder
//!
//! Settings live in `placefinder/config.toml` under the user's config
//! directory. A missing file is created with defaults on first load.

use crate::geo::{Coordinate, DEFAULT_CENTER};
use crate::location::{MIN_UPDATE_INTERVAL, TrackerOptions};
use crate::query::DEFAULT_RADIUS_M;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the sled database; platform data dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Search radius in meters used when none is given
    pub default_radius: f64,

    /// Restore the last accepted location across sessions
    pub persist_last_location: bool,

    /// Minimum spacing between accepted location fixes
    pub min_update_interval_ms: u64,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Reference point used before any location fix
    pub default_center: Coordinate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_radius: DEFAULT_RADIUS_M,
            default_center: DEFAULT_CENTER,
            persist_last_location: false,
            min_update_interval_ms: u64::try_from(MIN_UPDATE_INTERVAL.as_millis())
                .unwrap_or(1000),
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".into()))?;
        Ok(config_dir.join("placefinder").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed,
    /// validated or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, validated
    /// or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let config: Self = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Reject values no component can work with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_radius.is_nan() || self.default_radius <= 0.0 {
            return Err(ConfigError::Message(format!(
                "default_radius must be positive, got {}",
                self.default_radius
            )));
        }
        if u128::from(self.min_update_interval_ms) < MIN_UPDATE_INTERVAL.as_millis() {
            return Err(ConfigError::Message(format!(
                "min_update_interval_ms must be at least {}, got {}",
                MIN_UPDATE_INTERVAL.as_millis(),
                self.min_update_interval_ms
            )));
        }
        self.default_center
            .validate()
            .map_err(|e| ConfigError::Message(format!("default_center: {e}")))
    }

    /// Set a field from its textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not
    /// parse; the configuration is left unchanged in that case.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |e: &dyn std::fmt::Display| {
            ConfigError::Message(format!("Invalid value '{value}' for {key}: {e}"))
        };
        let mut updated = self.clone();
        match key {
            "data_dir" => updated.data_dir = Some(PathBuf::from(value)),
            "default_radius" => {
                updated.default_radius = value.parse::<f64>().map_err(|e| invalid(&e))?;
            }
            "default_center" => {
                let (lat, lng) = value
                    .split_once(',')
                    .ok_or_else(|| invalid(&"expected LAT,LNG"))?;
                updated.default_center = Coordinate::new(
                    lat.trim().parse::<f64>().map_err(|e| invalid(&e))?,
                    lng.trim().parse::<f64>().map_err(|e| invalid(&e))?,
                );
            }
            "persist_last_location" => {
                updated.persist_last_location = value.parse::<bool>().map_err(|e| invalid(&e))?;
            }
            "min_update_interval_ms" => {
                updated.min_update_interval_ms = value.parse::<u64>().map_err(|e| invalid(&e))?;
            }
            "quiet" => updated.quiet = value.parse::<bool>().map_err(|e| invalid(&e))?,
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Directory for the sled database
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no directory is configured and the platform
    /// data directory cannot be determined.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_local_dir()
                .map(|dir| dir.join("placefinder"))
                .ok_or_else(|| ConfigError::Message("Could not determine data directory".into())),
        }
    }

    /// Options for a [`LocationTracker`](crate::location::LocationTracker)
    #[must_use]
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            fallback: self.default_center,
            min_interval: Duration::from_millis(self.min_update_interval_ms)
                .max(MIN_UPDATE_INTERVAL),
            persist_last_location: self.persist_last_location,
        }
    }
}
