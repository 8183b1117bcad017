//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Language;

/// Log levels accepted by `logging.level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Label language for user-facing messages
    #[serde(default)]
    pub language: Language,

    /// Reference data file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.paths.couriers_file.trim().is_empty() {
            return Err(AppError::validation("paths.couriers_file is empty"));
        }
        if self.paths.tracking_file.trim().is_empty() {
            return Err(AppError::validation("paths.tracking_file is empty"));
        }
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Path to the courier table inside the data directory.
    pub fn couriers_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.couriers_file)
    }

    /// Path to the tracking database inside the data directory.
    pub fn tracking_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.paths.tracking_file)
    }
}

/// Reference data file names, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "defaults::couriers_file")]
    pub couriers_file: String,

    #[serde(default = "defaults::tracking_file")]
    pub tracking_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            couriers_file: defaults::couriers_file(),
            tracking_file: defaults::tracking_file(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn couriers_file() -> String {
        "couriers.json".into()
    }
    pub fn tracking_file() -> String {
        "tracking.json".into()
    }
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_couriers_file() {
        let mut config = Config::default();
        config.paths.couriers_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"ID\"\n[paths]\ntracking_file = \"mock.json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.language, Language::Id);
        assert_eq!(config.paths.couriers_file, "couriers.json");
        assert_eq!(config.paths.tracking_file, "mock.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = [").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }

    #[test]
    fn paths_resolve_against_data_dir() {
        let config = Config::default();
        let dir = Path::new("data");
        assert_eq!(config.couriers_path(dir), Path::new("data/couriers.json"));
        assert_eq!(config.tracking_path(dir), Path::new("data/tracking.json"));
    }
}
