//! Persistence for players and match results
//!
//! This module defines the storage interface the tournament core depends on,
//! with in-memory and JSON file implementations.

pub mod file;
pub mod memory;
pub mod store;

// Re-export commonly used types
pub use file::JsonFileStore;
pub use memory::InMemoryTournamentStore;
pub use store::{TournamentSnapshot, TournamentState, TournamentStore};

use crate::config::{StorageBackend, StorageSettings};
use std::sync::Arc;

/// Build the store selected by the storage settings
pub fn open_store(settings: &StorageSettings) -> Arc<dyn TournamentStore> {
    match settings.backend {
        StorageBackend::Memory => Arc::new(InMemoryTournamentStore::new()),
        StorageBackend::File => Arc::new(JsonFileStore::new(settings.data_file.clone())),
    }
}
