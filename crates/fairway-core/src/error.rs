//! Error types for the fairway draft engine.

use thiserror::Error;

use crate::domain::Side;

/// Main error type for draft operations.
///
/// All variants are recoverable: a failed operation leaves the draft
/// session unchanged, and the caller can refresh its view and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    /// Selector invoked with fewer players than the candidate requires.
    #[error("not enough players available: need {needed}, have {available}")]
    EmptyPool { needed: usize, available: usize },

    /// Lock-in referenced a player already used or unknown on that side.
    #[error("player '{name}' is not available on side {side}")]
    PlayerNotAvailable { side: Side, name: String },

    /// A selection does not hold exactly the format's count of distinct players.
    #[error("selection must contain exactly {expected} distinct player(s), got {actual}")]
    InvalidSelectionSize { expected: usize, actual: usize },

    /// Lock-in attempted after the final round.
    #[error("draft is complete after {limit} rounds")]
    DraftComplete { limit: u32 },

    /// Session constructed from malformed rosters.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// Balance weight outside the `[0, 1]` range.
    #[error("balance weight must be within [0, 1], got {value}")]
    InvalidBalanceWeight { value: f64 },
}

/// Result type alias for draft operations.
pub type Result<T> = std::result::Result<T, DraftError>;
