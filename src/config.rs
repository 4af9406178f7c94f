//! Application configuration file support.
//!
//! Configuration is read from a TOML file. Every setting has a default, so
//! running without a file is fully supported; a missing file is only an
//! error when the caller named it explicitly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "HEALTHGUARD_CONFIG";

/// Default configuration file searched in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "healthguard.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Forecasting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Location of the trained inflow-model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Longest horizon a single query may request
    #[serde(default = "default_max_horizon_days")]
    pub max_horizon_days: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/inflow_model.json")
}

fn default_max_horizon_days() -> u32 {
    crate::forecast::DEFAULT_MAX_HORIZON_DAYS
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            max_horizon_days: default_max_horizon_days(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve configuration for this process.
    ///
    /// Precedence:
    /// 1. File named by `HEALTHGUARD_CONFIG` (must exist and parse)
    /// 2. `healthguard.toml` in the working directory, if present
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(PathBuf::from(path));
        }
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        Ok(Self::default())
    }
}
