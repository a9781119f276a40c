//! Standings calculation
//!
//! Derives each player's wins and matches played from the recorded results and
//! ranks players by wins. Every registered player gets an entry, including
//! players who have not played yet.

use crate::types::{MatchRecord, Player, PlayerId, StandingEntry};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
struct Record {
    wins: u32,
    losses: u32,
}

/// Rank players by wins, descending.
///
/// Equal win counts keep the order of `players`, i.e. registration order.
/// Match rows naming an id that is not in `players` are ignored.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingEntry> {
    let mut records: HashMap<PlayerId, Record> = players
        .iter()
        .map(|player| (player.id, Record::default()))
        .collect();

    for result in matches {
        if let Some(record) = records.get_mut(&result.winner_id) {
            record.wins += 1;
        }
        if let Some(record) = records.get_mut(&result.loser_id) {
            record.losses += 1;
        }
    }

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|player| {
            let record = records.get(&player.id).copied().unwrap_or_default();
            StandingEntry {
                player_id: player.id,
                name: player.name.clone(),
                wins: record.wins,
                matches_played: record.wins + record.losses,
            }
        })
        .collect();

    // sort_by is stable
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));

    debug!(
        "Computed standings for {} players from {} matches",
        standings.len(),
        matches.len()
    );
    standings
}
