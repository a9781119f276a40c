//! Swiss-system standings and pairing
//!
//! This module ranks players from recorded results and pairs neighbours in
//! the ranking for the next round.

pub mod pairing;
pub mod standings;
pub mod tournament;

// Re-export commonly used types
pub use pairing::pair_standings;
pub use standings::compute_standings;
pub use tournament::SwissTournament;
