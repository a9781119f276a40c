//! In-memory tournament storage

use super::store::{TournamentSnapshot, TournamentState, TournamentStore};
use crate::error::{Result, TournamentError};
use crate::types::{MatchRecord, Player, PlayerId};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Tournament store held entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryTournamentStore {
    state: RwLock<TournamentState>,
}

impl InMemoryTournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing state (for testing and imports)
    pub fn with_state(state: TournamentState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TournamentState>> {
        self.state
            .read()
            .map_err(|_| TournamentError::persistence("Failed to acquire tournament read lock"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TournamentState>> {
        self.state
            .write()
            .map_err(|_| TournamentError::persistence("Failed to acquire tournament write lock"))
    }
}

impl TournamentStore for InMemoryTournamentStore {
    fn clear_matches(&self) -> Result<()> {
        self.write()?.clear_matches();
        Ok(())
    }

    fn clear_players(&self) -> Result<()> {
        self.write()?.clear_players()
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.read()?.players().len())
    }

    fn count_matches(&self) -> Result<usize> {
        Ok(self.read()?.matches().len())
    }

    fn register_player(&self, name: &str) -> Result<Player> {
        let player = self.write()?.register_player(name);
        debug!("Stored player {} in memory", player.id);
        Ok(player)
    }

    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
        self.write()?.record_match(winner_id, loser_id)
    }

    fn snapshot(&self) -> Result<TournamentSnapshot> {
        Ok(self.read()?.snapshot())
    }
}
