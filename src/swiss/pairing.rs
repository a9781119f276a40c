//! Swiss pairing generation
//!
//! Pairs players who sit next to each other in the standings: first with
//! second, third with fourth, and so on.

use crate::error::{Result, TournamentError};
use crate::types::{Pairing, StandingEntry};
use tracing::{debug, warn};

/// Pair adjacent entries of a ranked standings list.
///
/// Each pairing lists the higher-ranked player first. An odd number of
/// entries cannot be paired without a bye and is rejected.
pub fn pair_standings(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        warn!(
            "Refusing to pair {} players: count is odd",
            standings.len()
        );
        return Err(TournamentError::invalid_state(
            "cannot pair an odd number of players",
        ));
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            first: (&pair[0]).into(),
            second: (&pair[1]).into(),
        })
        .collect();

    debug!("Generated {} pairings", pairings.len());
    Ok(pairings)
}
