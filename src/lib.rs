//! Swiss Pairing - Swiss-system tournament management
//!
//! This crate provides player registration, match result recording, standings
//! and next-round Swiss pairings on top of a pluggable tournament store.

pub mod config;
pub mod error;
pub mod storage;
pub mod swiss;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use storage::{InMemoryTournamentStore, JsonFileStore, TournamentStore};
pub use swiss::{compute_standings, pair_standings, SwissTournament};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
