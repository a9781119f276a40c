//! Tournament service
//!
//! `SwissTournament` is the entry point callers use: it owns an injected store
//! and exposes registration, result reporting, standings and next-round
//! pairings on top of it.

use super::pairing::pair_standings;
use crate::config::TournamentSettings;
use crate::error::Result;
use crate::storage::TournamentStore;
use crate::types::{MatchRecord, Pairing, Player, PlayerId, StandingEntry, TournamentSummary};
use crate::utils::sanitize_name;
use std::sync::Arc;
use tracing::{debug, info};

/// Swiss-system tournament backed by a [`TournamentStore`]
#[derive(Clone)]
pub struct SwissTournament {
    store: Arc<dyn TournamentStore>,
    settings: TournamentSettings,
}

impl SwissTournament {
    /// Create a tournament with default settings
    pub fn new(store: Arc<dyn TournamentStore>) -> Self {
        Self::with_settings(store, TournamentSettings::default())
    }

    pub fn with_settings(store: Arc<dyn TournamentStore>, settings: TournamentSettings) -> Self {
        Self { store, settings }
    }

    /// Register a player. The display name is escaped unless sanitizing is
    /// turned off in the settings. Names need not be unique.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let name = if self.settings.sanitize_names {
            sanitize_name(name, self.settings.max_name_length)
        } else {
            name.to_string()
        };

        let player = self.store.register_player(&name)?;
        info!("Registered player {} '{}'", player.id, player.name);
        Ok(player)
    }

    /// Record the outcome of a single match
    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<MatchRecord> {
        let record = self.store.record_match(winner_id, loser_id)?;
        info!("Recorded match: {} beat {}", winner_id, loser_id);
        Ok(record)
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn delete_matches(&self) -> Result<()> {
        self.store.clear_matches()?;
        info!("Deleted all matches");
        Ok(())
    }

    pub fn delete_players(&self) -> Result<()> {
        self.store.clear_players()?;
        info!("Deleted all players");
        Ok(())
    }

    /// Delete matches, then players
    pub fn reset(&self) -> Result<()> {
        self.delete_matches()?;
        self.delete_players()
    }

    /// Current standings, ranked by wins with registration order on ties
    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        self.store.fetch_standings()
    }

    /// Pairings for the next round.
    ///
    /// Fails with `InvalidState` when an odd number of players is registered.
    pub fn pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.standings()?;
        let pairings = pair_standings(&standings)?;
        info!(
            "Paired {} players into {} matches",
            standings.len(),
            pairings.len()
        );
        Ok(pairings)
    }

    pub fn summary(&self) -> Result<TournamentSummary> {
        let snapshot = self.store.snapshot()?;
        let summary = TournamentSummary {
            players: snapshot.players.len(),
            matches: snapshot.matches.len(),
            next_round_pairable: snapshot.players.len() % 2 == 0,
        };
        debug!("Tournament summary: {:?}", summary);
        Ok(summary)
    }
}
