//! Test fixtures and fake stores for integration testing

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use swiss_pairing::error::{Result, TournamentError};
use swiss_pairing::storage::{InMemoryTournamentStore, TournamentSnapshot, TournamentStore};
use swiss_pairing::types::{MatchRecord, Player, PlayerId};
use swiss_pairing::SwissTournament;

/// Store whose every operation fails, as an unreachable database would
#[derive(Debug, Default)]
pub struct UnavailableStore {
    calls: AtomicUsize,
}

impl UnavailableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations attempted against the store
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TournamentError::persistence("could not connect to server"))
    }
}

impl TournamentStore for UnavailableStore {
    fn clear_matches(&self) -> Result<()> {
        self.fail()
    }

    fn clear_players(&self) -> Result<()> {
        self.fail()
    }

    fn count_players(&self) -> Result<usize> {
        self.fail()
    }

    fn count_matches(&self) -> Result<usize> {
        self.fail()
    }

    fn register_player(&self, _name: &str) -> Result<Player> {
        self.fail()
    }

    fn record_match(&self, _winner_id: PlayerId, _loser_id: PlayerId) -> Result<MatchRecord> {
        self.fail()
    }

    fn snapshot(&self) -> Result<TournamentSnapshot> {
        self.fail()
    }
}

/// Fresh in-memory tournament
pub fn create_test_tournament() -> SwissTournament {
    SwissTournament::new(Arc::new(InMemoryTournamentStore::new()))
}

/// In-memory tournament with the given players registered in order
pub fn tournament_with_players(names: &[&str]) -> (SwissTournament, Vec<Player>) {
    let tournament = create_test_tournament();
    let players = names
        .iter()
        .map(|name| tournament.register_player(name).unwrap())
        .collect();
    (tournament, players)
}
