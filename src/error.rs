//! Error types for the tournament service
//!
//! Library operations return typed errors so callers can decide on their own
//! retry or abort policy. The binary converts them to `anyhow` at the edge.

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TournamentError>;

/// Errors raised by the tournament core and its persistence collaborators
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    /// Any failure in the underlying data store (I/O, corrupt data,
    /// constraint violation). Propagated unmodified, never retried.
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// The tournament is in a state the requested operation cannot handle
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },
}

impl TournamentError {
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the data store rather than the core
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
