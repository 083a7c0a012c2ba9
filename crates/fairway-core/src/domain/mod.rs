//! Domain model for golf trip draft pairing.
//!
//! A draft runs between two fixed sides, each owning a roster of players
//! graded by handicap. Rounds lock in one match at a time (a pair per side
//! in best ball, one player per side in singles) until the rosters are
//! exhausted.

mod player;
mod selection;


pub use player::Player;
pub use selection::{MatchRecord, Pair, Selection};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};

/// One of the two fixed sides of the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Returns the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Draft format, determining how many players each side commits per match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Two-player teams per side per match.
    #[default]
    BestBall,

    /// One player per side per match.
    Singles,
}

impl Format {
    /// Number of players each side commits to one match.
    #[inline]
    pub fn group_size(self) -> usize {
        match self {
            Format::BestBall => 2,
            Format::Singles => 1,
        }
    }

    /// Number of rounds needed to exhaust a roster of the given size.
    ///
    /// An 8-player roster gives 4 best-ball rounds or 8 singles rounds.
    #[inline]
    pub fn round_limit(self, roster_len: usize) -> u32 {
        (roster_len / self.group_size()) as u32
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::BestBall => write!(f, "best ball"),
            Format::Singles => write!(f, "singles"),
        }
    }
}

/// Mixing weight between competitive scoring terms and internal balance.
///
/// At 0 the selector favors stroke-maximizing candidates; at 1 it favors
/// internally balanced pairs. Validated into `[0, 1]` at construction.
///
/// # Examples
///
/// ```
/// use fairway_core::BalanceWeight;
///
/// let w = BalanceWeight::new(0.6).unwrap();
/// assert_eq!(w.value(), 0.6);
/// assert!(BalanceWeight::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceWeight(f64);

impl BalanceWeight {
    /// Creates a weight, rejecting values outside `[0, 1]` or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(DraftError::InvalidBalanceWeight { value });
        }
        Ok(BalanceWeight(value))
    }

    /// Returns the raw weight value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for BalanceWeight {
    /// An even mix of competitiveness and internal balance.
    fn default() -> Self {
        BalanceWeight(0.5)
    }
}

/// Snapshot of the session's round progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    /// Current round, starting at 1.
    pub round_number: u32,
    /// Total rounds before the draft completes.
    pub limit: u32,
    /// True once every round has been locked in.
    pub complete: bool,
}
