//! Pure scoring functions over player handicaps.
//!
//! These functions grade candidate groups (a single player or a pair) along
//! two axes:
//! - **Internal balance** - how close a pair's two handicaps are
//! - **Competitive fairness** - how close two opposing groups' average
//!   handicaps are, and the signed stroke edge between them
//!
//! All functions are pure and cheap; the selector re-invokes them freely.
//! Normalization uses [`HANDICAP_SPREAD`], a practical maximum handicap
//! spread of 36 strokes.

use fairway_core::{DraftError, Pair, Player, Result};

#[cfg(test)]
mod tests;

/// Practical maximum handicap spread, used to normalize scores.
pub const HANDICAP_SPREAD: f64 = 36.0;

/// Arithmetic mean handicap of a group of 1–2 players.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] for an empty group.
///
/// # Examples
///
/// ```
/// use fairway_core::Player;
/// use fairway_scoring::average_handicap;
///
/// let group = [Player::new("P1", 10.0), Player::new("P2", 20.0)];
/// assert_eq!(average_handicap(&group).unwrap(), 15.0);
/// ```
pub fn average_handicap(group: &[Player]) -> Result<f64> {
    if group.is_empty() {
        return Err(DraftError::EmptyPool {
            needed: 1,
            available: 0,
        });
    }
    let sum: f64 = group.iter().map(Player::handicap).sum();
    Ok(sum / group.len() as f64)
}

/// How similar in skill a pair's two members are.
///
/// Computed as `1 - |h1 - h2| / 36`. Higher means more similar teammates.
/// Deliberately not clamped: spreads over 36 strokes score below zero.
pub fn internal_balance(pair: &Pair) -> f64 {
    1.0 - pair.spread() / HANDICAP_SPREAD
}

/// How evenly matched two opposing groups are.
///
/// Computed as `1 - |avg(x) - avg(y)| / 36`. Higher means a fairer
/// head-to-head match.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] if either group is empty.
pub fn cross_evenness(x: &[Player], y: &[Player]) -> Result<f64> {
    let diff = (average_handicap(x)? - average_handicap(y)?).abs();
    Ok(1.0 - diff / HANDICAP_SPREAD)
}

/// Signed stroke edge of group `x` over group `y`.
///
/// Positive means `x` carries the higher average handicap and receives that
/// many strokes of advantage. Antisymmetric: swapping the arguments negates
/// the result. The sign is part of the answer; never absolute-value it
/// before display.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] if either group is empty.
pub fn stroke_advantage(x: &[Player], y: &[Player]) -> Result<f64> {
    Ok(average_handicap(x)? - average_handicap(y)?)
}
