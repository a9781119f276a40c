//! Tournament storage interface
//!
//! This module defines the persistence collaborator the tournament core talks
//! to, and the table state shared by the bundled store implementations.

use crate::error::{Result, TournamentError};
use crate::swiss::standings::compute_standings;
use crate::types::{MatchRecord, Player, PlayerId, StandingEntry};
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};

/// A consistent point-in-time copy of the players and matches tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentSnapshot {
    /// Players in registration order
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

/// Trait for tournament storage operations
#[cfg_attr(test, mockall::automock)]
pub trait TournamentStore: Send + Sync {
    /// Delete every match record
    fn clear_matches(&self) -> Result<()>;

    /// Delete every player. Fails while match records still reference players.
    fn clear_players(&self) -> Result<()>;

    /// Number of registered players
    fn count_players(&self) -> Result<usize>;

    /// Number of recorded matches
    fn count_matches(&self) -> Result<usize>;

    /// Insert a player and assign a fresh id
    fn register_player(&self, name: &str) -> Result<Player>;

    /// Insert one match result. Both ids must belong to registered players.
    fn record_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord>;

    /// Read players and matches in a single consistent view
    fn snapshot(&self) -> Result<TournamentSnapshot>;

    /// Standings computed from one snapshot, ranked by wins
    fn fetch_standings(&self) -> Result<Vec<StandingEntry>> {
        let snapshot = self.snapshot()?;
        Ok(compute_standings(&snapshot.players, &snapshot.matches))
    }
}

fn first_player_id() -> PlayerId {
    1
}

/// Player and match tables plus the id sequence.
///
/// The sequence is never rewound, so ids stay unique across `clear_players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentState {
    #[serde(default = "first_player_id")]
    next_player_id: PlayerId,
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    matches: Vec<MatchRecord>,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self {
            next_player_id: first_player_id(),
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl TournamentState {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn is_registered(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|player| player.id == player_id)
    }

    pub fn register_player(&mut self, name: &str) -> Player {
        let player = Player {
            id: self.next_player_id,
            name: name.to_string(),
            registered_at: current_timestamp(),
        };
        self.next_player_id += 1;
        self.players.push(player.clone());
        player
    }

    pub fn record_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
        for player_id in [winner_id, loser_id] {
            if !self.is_registered(player_id) {
                return Err(TournamentError::persistence(format!(
                    "match references unregistered player {}",
                    player_id
                )));
            }
        }

        let record = MatchRecord {
            winner_id,
            loser_id,
            recorded_at: current_timestamp(),
        };
        self.matches.push(record.clone());
        Ok(record)
    }

    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    pub fn clear_players(&mut self) -> Result<()> {
        if !self.matches.is_empty() {
            return Err(TournamentError::persistence(format!(
                "cannot delete players while {} match records reference them",
                self.matches.len()
            )));
        }
        self.players.clear();
        Ok(())
    }

    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            players: self.players.clone(),
            matches: self.matches.clone(),
        }
    }
}
