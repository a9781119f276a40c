//! Main application configuration
//!
//! This module defines the configuration structures for the swiss-pairing
//! service, including environment variable and TOML file loading and
//! validation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub tournament: TournamentSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where players and matches are kept. `Memory` lives only as long as the
/// process, so it suits library callers and tests but not the one-shot CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::File => write!(f, "file"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            _ => Err(anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// JSON data file used by the file backend
    pub data_file: PathBuf,
}

/// Tournament rules that sit outside the pairing core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    /// Escape HTML markup in registered names
    pub sanitize_names: bool,
    /// Maximum name length in characters, 0 for unlimited
    pub max_name_length: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "swiss-pairing".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_file: PathBuf::from("tournament.json"),
        }
    }
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            sanitize_names: true,
            max_name_length: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still win
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Storage settings
        if let Ok(backend) = env::var("STORAGE_BACKEND") {
            self.storage.backend = backend.parse()?;
        }
        if let Ok(path) = env::var("DATA_FILE") {
            self.storage.data_file = PathBuf::from(path);
        }

        // Tournament settings
        if let Ok(sanitize) = env::var("SANITIZE_NAMES") {
            self.tournament.sanitize_names = sanitize
                .parse()
                .map_err(|_| anyhow!("Invalid SANITIZE_NAMES value: {}", sanitize))?;
        }
        if let Ok(max_len) = env::var("MAX_NAME_LENGTH") {
            self.tournament.max_name_length = max_len
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_NAME_LENGTH value: {}", max_len))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.storage.backend == StorageBackend::File
        && config.storage.data_file.as_os_str().is_empty()
    {
        return Err(anyhow!("Data file path cannot be empty for the file backend"));
    }

    Ok(())
}

/// Extra checks for the command line binary, which exits after every command
pub fn validate_cli_config(config: &AppConfig) -> Result<()> {
    if config.storage.backend == StorageBackend::Memory {
        return Err(anyhow!(
            "The memory backend keeps nothing between runs; use the file backend from the CLI"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.tournament.sanitize_names);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_data_file_rejected_only_for_file_backend() {
        let mut config = AppConfig::default();
        config.storage.data_file = PathBuf::new();
        assert!(validate_config(&config).is_err());

        config.storage.backend = StorageBackend::Memory;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_cli_rejects_memory_backend() {
        let mut config = AppConfig::default();
        assert!(validate_cli_config(&config).is_ok());

        config.storage.backend = StorageBackend::Memory;
        let err = validate_cli_config(&config).unwrap_err();
        assert!(err.to_string().contains("memory backend"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            backend = "memory"

            [tournament]
            max_name_length = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_file, PathBuf::from("tournament.json"));
        assert_eq!(config.tournament.max_name_length, 40);
        assert!(config.tournament.sanitize_names);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("MEMORY".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("file".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("postgres".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }
}
