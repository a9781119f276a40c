//! Common types used throughout the tournament service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for registered players, assigned by the store
pub type PlayerId = i64;

/// A registered tournament player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// Outcome of a single match. Draws are not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub recorded_at: DateTime<Utc>,
}

/// A player's derived record, one row of the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

impl StandingEntry {
    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

/// One side of a pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl From<&StandingEntry> for PairedPlayer {
    fn from(entry: &StandingEntry) -> Self {
        Self {
            id: entry.player_id,
            name: entry.name.clone(),
        }
    }
}

/// A scheduled match for the next round. `first` is the higher-ranked player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: PairedPlayer,
    pub second: PairedPlayer,
}

impl Pairing {
    /// Flatten into the `(id1, name1, id2, name2)` row shape
    pub fn as_tuple(&self) -> (PlayerId, &str, PlayerId, &str) {
        (
            self.first.id,
            &self.first.name,
            self.second.id,
            &self.second.name,
        )
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) vs {} ({})",
            self.first.name, self.first.id, self.second.name, self.second.id
        )
    }
}

/// Player and match counts plus whether the next round can be paired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub players: usize,
    pub matches: usize,
    pub next_round_pairable: bool,
}
