//! Configuration management for the swiss-pairing service
//!
//! This module handles configuration loading from environment variables and
//! TOML files, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{
    validate_cli_config, validate_config, AppConfig, ServiceSettings, StorageBackend,
    StorageSettings, TournamentSettings,
};
