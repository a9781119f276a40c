/// Property-based tests for standings and pairing using proptest
///
/// These tests verify the ranking and pairing invariants across randomly
/// generated tournaments: any number of players and any set of results
/// between them.
use proptest::prelude::*;
use std::collections::HashSet;
use swiss_pairing::types::{MatchRecord, Player, PlayerId};
use swiss_pairing::utils::current_timestamp;
use swiss_pairing::{compute_standings, pair_standings};

// Strategy to generate a roster of players with ids 1..=n
fn roster_strategy(max_players: usize) -> impl Strategy<Value = Vec<Player>> {
    (0..=max_players).prop_map(|count| {
        (1..=count as PlayerId)
            .map(|id| Player {
                id,
                name: format!("Player {}", id),
                registered_at: current_timestamp(),
            })
            .collect()
    })
}

// Strategy to generate a roster together with results between its players
fn tournament_strategy() -> impl Strategy<Value = (Vec<Player>, Vec<MatchRecord>)> {
    roster_strategy(24).prop_flat_map(|players| {
        let count = players.len() as PlayerId;
        let matches = if count == 0 {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec((1..=count, 1..=count), 0..60)
                .prop_map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(winner_id, loser_id)| MatchRecord {
                            winner_id,
                            loser_id,
                            recorded_at: current_timestamp(),
                        })
                        .collect()
                })
                .boxed()
        };
        (Just(players), matches)
    })
}

proptest! {
    #[test]
    fn test_total_wins_equal_match_count((players, matches) in tournament_strategy()) {
        let standings = compute_standings(&players, &matches);
        let total_wins: u32 = standings.iter().map(|e| e.wins).sum();
        prop_assert_eq!(total_wins as usize, matches.len());
    }

    #[test]
    fn test_one_entry_per_player((players, matches) in tournament_strategy()) {
        let standings = compute_standings(&players, &matches);
        prop_assert_eq!(standings.len(), players.len());

        let ids: HashSet<PlayerId> = standings.iter().map(|e| e.player_id).collect();
        prop_assert_eq!(ids.len(), players.len());
    }

    #[test]
    fn test_idle_players_have_empty_record((players, matches) in tournament_strategy()) {
        let active: HashSet<PlayerId> = matches
            .iter()
            .flat_map(|m| [m.winner_id, m.loser_id])
            .collect();

        for entry in compute_standings(&players, &matches) {
            if !active.contains(&entry.player_id) {
                prop_assert_eq!(entry.wins, 0);
                prop_assert_eq!(entry.matches_played, 0);
            }
        }
    }

    #[test]
    fn test_matches_played_is_wins_plus_losses((players, matches) in tournament_strategy()) {
        for entry in compute_standings(&players, &matches) {
            let wins = matches.iter().filter(|m| m.winner_id == entry.player_id).count() as u32;
            let losses = matches.iter().filter(|m| m.loser_id == entry.player_id).count() as u32;
            prop_assert_eq!(entry.wins, wins);
            prop_assert_eq!(entry.matches_played, wins + losses);
        }
    }

    #[test]
    fn test_ranked_by_wins_then_registration((players, matches) in tournament_strategy()) {
        let standings = compute_standings(&players, &matches);
        for window in standings.windows(2) {
            prop_assert!(window[0].wins >= window[1].wins);
            if window[0].wins == window[1].wins {
                // ids are assigned in registration order
                prop_assert!(window[0].player_id < window[1].player_id);
            }
        }
    }

    #[test]
    fn test_pairing_covers_every_player_once((players, matches) in tournament_strategy()) {
        let standings = compute_standings(&players, &matches);

        match pair_standings(&standings) {
            Ok(pairings) => {
                prop_assert_eq!(players.len() % 2, 0);
                prop_assert_eq!(pairings.len(), players.len() / 2);

                let mut seen = HashSet::new();
                for pairing in &pairings {
                    prop_assert!(seen.insert(pairing.first.id));
                    prop_assert!(seen.insert(pairing.second.id));
                }
                prop_assert_eq!(seen.len(), players.len());
            }
            Err(err) => {
                prop_assert_eq!(players.len() % 2, 1);
                prop_assert!(err.is_invalid_state());
            }
        }
    }

    #[test]
    fn test_pairs_are_adjacent_in_standings((players, matches) in tournament_strategy()) {
        let standings = compute_standings(&players, &matches);
        prop_assume!(standings.len() % 2 == 0);

        let pairings = pair_standings(&standings).unwrap();
        for (i, pairing) in pairings.iter().enumerate() {
            prop_assert_eq!(pairing.first.id, standings[2 * i].player_id);
            prop_assert_eq!(pairing.second.id, standings[2 * i + 1].player_id);
        }
    }
}
