//! Dashboard configuration file support.
//!
//! Configuration is read from a TOML file (`dashboard.toml`) and then
//! adjusted by environment variables. Every setting has a default, so a
//! missing file yields the standard three-airline DFW dashboard.
//!
//! ```toml
//! [generator]
//! seed = 42
//! window_days = 30
//! airlines = ["American Airlines", "Delta", "Alaska Airlines"]
//! hub_airline = "American Airlines"
//! hub_range = [150, 200]
//! other_range = [20, 50]
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::generator::{GeneratorError, GeneratorParams};

/// Explicit config file path.
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";
pub const SEED_ENV: &str = "DASHBOARD_SEED";
pub const WINDOW_DAYS_ENV: &str = "DASHBOARD_WINDOW_DAYS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Environment variable {key} has invalid value '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid generator settings: {0}")]
    Generator(#[from] GeneratorError),
}

/// Dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub generator: GeneratorParams,
    #[serde(default)]
    pub server: ServerSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load the effective configuration.
    ///
    /// Uses `DASHBOARD_CONFIG` if set, otherwise the first default location
    /// that exists, otherwise built-in defaults. Environment overrides are
    /// applied last and the result is validated.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(Self::find_default_file);

        let mut config = match path {
            Some(path) => {
                log::info!("Loading dashboard config from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                log::info!("No dashboard.toml found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DASHBOARD_SEED`, `DASHBOARD_WINDOW_DAYS`, `HOST` and `PORT`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(seed) = parse_env(SEED_ENV)? {
            self.generator.seed = seed;
        }
        if let Some(window_days) = parse_env(WINDOW_DAYS_ENV)? {
            self.generator.window_days = window_days;
        }
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(port) = parse_env(PORT_ENV)? {
            self.server.port = port;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
        Err(_) => Ok(None),
    }
}
