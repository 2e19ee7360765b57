//! Application configuration
//!
//! Loaded from a TOML file (default: `~/.config/user-store/config.toml`).
//! Every section and key is optional; missing values fall back to defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//! shutdown_timeout = 10
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//!
//! [store]
//! seed_on_startup = true
//!
//! [pagination]
//! default_per_page = 10
//! max_per_page = 100
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ListLimits;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "USER_STORE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for in-flight requests after a shutdown signal.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: 10,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the three sample users when the server starts.
    pub seed_on_startup: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        let limits = ListLimits::default();
        Self {
            default_per_page: limits.default_per_page,
            max_per_page: limits.max_per_page,
        }
    }
}

impl From<&PaginationConfig> for ListLimits {
    fn from(cfg: &PaginationConfig) -> Self {
        Self {
            default_per_page: cfg.default_per_page,
            max_per_page: cfg.max_per_page,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if self.pagination.default_per_page == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_per_page must be at least 1".into(),
            ));
        }
        if self.pagination.max_per_page < self.pagination.default_per_page {
            return Err(ConfigError::Invalid(
                "pagination.max_per_page must be >= default_per_page".into(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// Config path from `USER_STORE_CONFIG`, else the platform config dir.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-store")
        .join("config.toml")
}
