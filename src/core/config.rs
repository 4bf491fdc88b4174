//! Configuration for the HSC study service
//!
//! Layering: defaults, then an optional TOML file, then environment variables, then CLI
//! overrides (applied by the binary). `validate` runs last.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use crate::core::error::{Error, Result};

/// Available storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// Volatile in-memory store
    Memory,
    /// In-memory store persisted as one JSON file per collection
    File,
    /// No store; data endpoints report the database as not configured
    Disabled,
}

impl std::str::FromStr for StorageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(StorageType::Memory),
            "file" => Ok(StorageType::File),
            "disabled" | "none" => Ok(StorageType::Disabled),
            other => Err(Error::config(format!(
                "Invalid storage type: {}. Valid options: memory, file, disabled",
                other
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Catalog seeding
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_addr: SocketAddr,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend type
    pub storage_type: StorageType,

    /// Directory holding collection snapshots (file backend only)
    pub data_dir: PathBuf,

    /// Database name reported by diagnostics
    pub database_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact)
    pub format: String,
}

/// Seeding configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed the compiled-in catalog before serving
    pub on_startup: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::Memory,
            data_dir: PathBuf::from("./data"),
            database_name: "hsc_study".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "hsc-study.toml";

impl Config {
    /// Load configuration from environment variables and config file.
    ///
    /// An explicit `path` must load. Without one, [`DEFAULT_CONFIG_FILE`] is used when it
    /// exists, defaults otherwise. Validation is left to the caller so CLI overrides can
    /// be applied first.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Config::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides_from<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(addr) = var("HSC_HTTP_ADDR") {
            self.server.http_addr = addr
                .parse()
                .map_err(|e| Error::config(format!("Invalid HTTP address: {}", e)))?;
        }

        if let Some(port) = var("PORT") {
            let port: u16 = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid port: {}", e)))?;
            self.server.http_addr.set_port(port);
        }

        // Storage overrides
        if let Some(url) = var("DATABASE_URL") {
            self.apply_database_url(&url)?;
        }

        if let Some(name) = var("DATABASE_NAME") {
            self.storage.database_name = name;
        }

        // Logging overrides
        if let Some(level) = var("HSC_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("HSC_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Some(flag) = var("HSC_SEED_ON_STARTUP") {
            self.seed.on_startup = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Interpret a database URL: `memory://...`, `file://<dir>` or `disabled`
    fn apply_database_url(&mut self, url: &str) -> Result<()> {
        if url == "disabled" || url.is_empty() {
            self.storage.storage_type = StorageType::Disabled;
        } else if url.starts_with("memory://") || url == "memory" {
            self.storage.storage_type = StorageType::Memory;
        } else if let Some(dir) = url.strip_prefix("file://") {
            if dir.is_empty() {
                return Err(Error::config("file:// database URL needs a directory"));
            }
            self.storage.storage_type = StorageType::File;
            self.storage.data_dir = PathBuf::from(dir);
        } else {
            return Err(Error::config(format!("Unsupported database URL: {}", url)));
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(Error::config("Invalid log level")),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" => {}
            _ => return Err(Error::config("Invalid log format")),
        }

        if self.storage.database_name.trim().is_empty() {
            return Err(Error::config("Database name must not be empty"));
        }

        Ok(())
    }
}
