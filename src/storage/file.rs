//! JSON file backed tournament storage
//!
//! The whole tournament lives in one pretty-printed JSON document. Each write
//! holds an advisory lock on a sibling `.lock` file while it loads the
//! document, applies the change and atomically replaces the file. Writers in
//! other handles or processes wait for the lock; readers never see a partial
//! state.

use super::store::{TournamentSnapshot, TournamentState, TournamentStore};
use crate::error::{Result, TournamentError};
use crate::types::{MatchRecord, Player, PlayerId};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Tournament store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn lock_path(&self) -> PathBuf {
        let mut lock = self.path.clone().into_os_string();
        lock.push(".lock");
        PathBuf::from(lock)
    }

    fn load(&self) -> Result<TournamentState> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(TournamentState::default());
            }
            Err(e) => {
                return Err(TournamentError::persistence(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            TournamentError::persistence(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Write through a uniquely named temp file in the same directory, then
    /// rename it over the data file
    fn save(&self, state: &TournamentState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| TournamentError::persistence(format!("Failed to serialize: {}", e)))?;

        let dir = self.dir();
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| {
            TournamentError::persistence(format!(
                "Failed to create temp file in {}: {}",
                dir.display(),
                e
            ))
        })?;
        tmp.write_all(json.as_bytes()).map_err(|e| {
            TournamentError::persistence(format!("Failed to write temp file: {}", e))
        })?;
        tmp.persist(&self.path).map_err(|e| {
            TournamentError::persistence(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// Load, apply `change`, and persist only if the change succeeded.
    ///
    /// The whole sequence runs under an exclusive lock on the lock file.
    fn transact<T>(&self, change: impl FnOnce(&mut TournamentState) -> Result<T>) -> Result<T> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| {
            TournamentError::persistence(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                TournamentError::persistence(format!(
                    "Failed to open {}: {}",
                    lock_path.display(),
                    e
                ))
            })?;
        let mut lock = fd_lock::RwLock::new(lock_file);
        let _guard = lock.write().map_err(|e| {
            TournamentError::persistence(format!("Failed to lock {}: {}", lock_path.display(), e))
        })?;

        let mut state = self.load()?;
        let value = change(&mut state)?;
        self.save(&state)?;
        Ok(value)
    }
}

impl TournamentStore for JsonFileStore {
    fn clear_matches(&self) -> Result<()> {
        self.transact(|state| {
            state.clear_matches();
            Ok(())
        })?;
        info!("Cleared matches in {}", self.path.display());
        Ok(())
    }

    fn clear_players(&self) -> Result<()> {
        self.transact(|state| state.clear_players())?;
        info!("Cleared players in {}", self.path.display());
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.load()?.players().len())
    }

    fn count_matches(&self) -> Result<usize> {
        Ok(self.load()?.matches().len())
    }

    fn register_player(&self, name: &str) -> Result<Player> {
        self.transact(|state| Ok(state.register_player(name)))
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
        self.transact(|state| state.record_match(winner_id, loser_id))
    }

    fn snapshot(&self) -> Result<TournamentSnapshot> {
        Ok(self.load()?.snapshot())
    }
}
