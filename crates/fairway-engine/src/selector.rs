//! Candidate enumeration and selection.
//!
//! Each selector walks the pool in roster order, scores every candidate and
//! keeps the first top scorer, so results are reproducible for a given pool
//! and weight. An 8-player pool costs at most C(8,2) = 28 evaluations.
//!
//! The balance weight `w` mixes two pulls:
//! - `w = 0` - chase strokes: high combined handicap, even matchups
//! - `w = 1` - internal balance: teammates of similar skill
//!
//! Singles have no teammate, so the balance term drops out and the singles
//! selectors take no weight.

use tracing::trace;

use fairway_core::{BalanceWeight, DraftError, Pair, Player, Result};
use fairway_scoring::{
    average_handicap, cross_evenness, internal_balance, stroke_advantage, HANDICAP_SPREAD,
};


/// Picks the best first-move pair from a pool.
///
/// Scores each unordered pair as
/// `(1 - w)·(stroke_factor - deviation_penalty) + w·internal_balance`,
/// where `stroke_factor` rewards a high combined handicap and
/// `deviation_penalty` discourages pairing extreme outliers relative to the
/// pool average.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] when fewer than 2 players remain.
pub fn best_pair(pool: &[Player], weight: BalanceWeight) -> Result<Pair> {
    if pool.len() < 2 {
        return Err(DraftError::EmptyPool {
            needed: 2,
            available: pool.len(),
        });
    }
    let pool_avg = average_handicap(pool)?;
    let w = weight.value();

    let mut best: Option<(Pair, f64)> = None;
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let pair = Pair::new(pool[i].clone(), pool[j].clone())?;
            let score = first_pair_score(&pair, pool_avg, w);
            trace!(candidate = %pair, score, "evaluated first pick");
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((pair, score));
            }
        }
    }
    // Guarded above; the loop always produces a candidate.
    match best {
        Some((pair, _)) => Ok(pair),
        None => Err(DraftError::EmptyPool {
            needed: 2,
            available: pool.len(),
        }),
    }
}

fn first_pair_score(pair: &Pair, pool_avg: f64, w: f64) -> f64 {
    let (a, b) = (&pair.players()[0], &pair.players()[1]);
    let stroke_factor = (a.handicap() + b.handicap()) / 2.0 / HANDICAP_SPREAD;
    let deviation_penalty = ((a.handicap() - pool_avg).abs() + (b.handicap() - pool_avg).abs())
        / (2.0 * HANDICAP_SPREAD);
    (1.0 - w) * (stroke_factor - deviation_penalty) + w * internal_balance(pair)
}

/// Picks the best answer to an opposing first pair.
///
/// Scores each candidate as
/// `(1 - w)·(cross_evenness + max(0, stroke_advantage)/36) +
/// w·internal_balance`. Only a stroke *gain* over the opposing pair earns a
/// bonus; a deficit contributes zero and is penalized implicitly through
/// the evenness term.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] when fewer than 2 players remain or
/// the opposing group is empty.
pub fn best_counter_pair(pool: &[Player], first: &[Player], weight: BalanceWeight) -> Result<Pair> {
    if pool.len() < 2 {
        return Err(DraftError::EmptyPool {
            needed: 2,
            available: pool.len(),
        });
    }
    let w = weight.value();

    let mut best: Option<(Pair, f64)> = None;
    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            let pair = Pair::new(pool[i].clone(), pool[j].clone())?;
            let evenness = cross_evenness(pair.players(), first)?;
            let gain = stroke_advantage(pair.players(), first)?.max(0.0) / HANDICAP_SPREAD;
            let score = (1.0 - w) * (evenness + gain) + w * internal_balance(&pair);
            trace!(candidate = %pair, score, "evaluated counter pick");
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((pair, score));
            }
        }
    }
    match best {
        Some((pair, _)) => Ok(pair),
        None => Err(DraftError::EmptyPool {
            needed: 2,
            available: pool.len(),
        }),
    }
}

/// Picks the best first-move single from a pool.
///
/// With no teammate the balance term is inapplicable; the score reduces to
/// `h/36 - |h - pool_avg|/36`.
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] when the pool is empty.
pub fn best_single(pool: &[Player]) -> Result<Player> {
    let pool_avg = average_handicap(pool)?;

    let mut best: Option<(&Player, f64)> = None;
    for player in pool {
        let score =
            (player.handicap() - (player.handicap() - pool_avg).abs()) / HANDICAP_SPREAD;
        trace!(candidate = %player, score, "evaluated first pick");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((player, score));
        }
    }
    match best {
        Some((player, _)) => Ok(player.clone()),
        None => Err(DraftError::EmptyPool {
            needed: 1,
            available: 0,
        }),
    }
}

/// Picks the best single-player answer to an opposing first pick.
///
/// Scores each candidate as `cross_evenness + max(0, stroke_advantage)/36`,
/// with the same gain-only clamp as [`best_counter_pair`].
///
/// # Errors
///
/// Returns [`DraftError::EmptyPool`] when either pool or the opposing
/// group is empty.
pub fn best_counter_single(pool: &[Player], first: &[Player]) -> Result<Player> {
    if pool.is_empty() {
        return Err(DraftError::EmptyPool {
            needed: 1,
            available: 0,
        });
    }

    let mut best: Option<(&Player, f64)> = None;
    for player in pool {
        let candidate = std::slice::from_ref(player);
        let evenness = cross_evenness(candidate, first)?;
        let gain = stroke_advantage(candidate, first)?.max(0.0) / HANDICAP_SPREAD;
        let score = evenness + gain;
        trace!(candidate = %player, score, "evaluated counter pick");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((player, score));
        }
    }
    match best {
        Some((player, _)) => Ok(player.clone()),
        None => Err(DraftError::EmptyPool {
            needed: 1,
            available: 0,
        }),
    }
}
