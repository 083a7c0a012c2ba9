//! Draft session state machine.
//!
//! A session owns both rosters, the shrinking "remaining" pools, and the
//! append-only match history. It is single-threaded and synchronous: every
//! operation runs to completion against in-memory state, and a failed
//! lock-in leaves the session untouched. Hosts running several drafts give
//! each its own session; there are no hidden globals.

use smallvec::SmallVec;
use tracing::{debug, info};

use fairway_config::{ConfigError, DraftConfig};
use fairway_core::{
    BalanceWeight, DraftError, Format, MatchRecord, Player, Result, RoundState, Selection, Side,
};

use crate::selector::{best_counter_pair, best_counter_single, best_pair, best_single};


/// Players per side; rosters larger than this spill to the heap.
type Pool = SmallVec<[Player; 8]>;

/// A draft in progress between two sides.
///
/// The session is `ACTIVE` while `round_number <= limit` and `COMPLETE`
/// once every round has been locked in. Conservation holds throughout: per
/// side, the locked players plus the remaining players always equal the
/// original roster.
///
/// # Examples
///
/// ```
/// use fairway_core::{BalanceWeight, Format, Player, Side};
/// use fairway_engine::DraftSession;
///
/// let roster_a = vec![Player::new("P1", 10.0), Player::new("P2", 20.0)];
/// let roster_b = vec![Player::new("Q1", 12.0), Player::new("Q2", 18.0)];
/// let mut session = DraftSession::new(Format::BestBall, roster_a, roster_b).unwrap();
///
/// let first = session.recommend_first(Side::A, BalanceWeight::default()).unwrap();
/// let counter = session.recommend_counter(Side::B, &first, BalanceWeight::default()).unwrap();
/// session.lock_in(Side::A, first, counter).unwrap();
///
/// assert!(session.round_state().complete);
/// ```
#[derive(Debug, Clone)]
pub struct DraftSession {
    format: Format,
    roster_a: Vec<Player>,
    roster_b: Vec<Player>,
    remaining_a: Pool,
    remaining_b: Pool,
    matches: Vec<MatchRecord>,
    round: u32,
    limit: u32,
}

impl DraftSession {
    /// Creates a session from two rosters.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidRoster`] when the rosters are empty,
    /// unequal in size, not divisible into the format's group size, or a
    /// side repeats a player name.
    pub fn new(format: Format, roster_a: Vec<Player>, roster_b: Vec<Player>) -> Result<Self> {
        if roster_a.is_empty() || roster_b.is_empty() {
            return Err(DraftError::InvalidRoster("rosters must not be empty".into()));
        }
        if roster_a.len() != roster_b.len() {
            return Err(DraftError::InvalidRoster(format!(
                "rosters must be the same size ({} vs {})",
                roster_a.len(),
                roster_b.len()
            )));
        }
        if roster_a.len() % format.group_size() != 0 {
            return Err(DraftError::InvalidRoster(format!(
                "a roster of {} players can't be split into groups of {}",
                roster_a.len(),
                format.group_size()
            )));
        }
        for roster in [&roster_a, &roster_b] {
            for (i, player) in roster.iter().enumerate() {
                if roster[..i].iter().any(|p| p.name() == player.name()) {
                    return Err(DraftError::InvalidRoster(format!(
                        "player '{}' appears twice on one side",
                        player.name()
                    )));
                }
            }
        }

        let limit = format.round_limit(roster_a.len());
        Ok(DraftSession {
            format,
            remaining_a: roster_a.iter().cloned().collect(),
            remaining_b: roster_b.iter().cloned().collect(),
            roster_a,
            roster_b,
            matches: Vec::new(),
            round: 1,
            limit,
        })
    }

    /// Creates a session from a validated [`DraftConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the configuration doesn't
    /// describe a playable draft.
    pub fn from_config(config: &DraftConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            config.format,
            config.team_a.players.clone(),
            config.team_b.players.clone(),
        )
        .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// The session's draft format.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Read-only view of a side's unassigned players, in roster order.
    pub fn available(&self, side: Side) -> &[Player] {
        match side {
            Side::A => &self.remaining_a,
            Side::B => &self.remaining_b,
        }
    }

    /// The side whose turn it is to send the first selection.
    ///
    /// Side A sends on odd rounds, side B on even rounds.
    pub fn sending_side(&self) -> Side {
        if self.round % 2 == 1 {
            Side::A
        } else {
            Side::B
        }
    }

    /// Round progress: current round, limit, and whether the draft is done.
    pub fn round_state(&self) -> RoundState {
        RoundState {
            round_number: self.round,
            limit: self.limit,
            complete: self.round > self.limit,
        }
    }

    /// The locked-in match history, oldest first.
    pub fn history(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Recommends a first-move selection from `side`'s remaining players.
    ///
    /// Pure and idempotent; calling it twice on an unchanged pool with the
    /// same weight returns the same selection. The weight is ignored for
    /// singles, where internal balance has no meaning.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyPool`] when too few players remain.
    pub fn recommend_first(&self, side: Side, weight: BalanceWeight) -> Result<Selection> {
        let selection: Selection = match self.format {
            Format::BestBall => best_pair(self.available(side), weight)?.into(),
            Format::Singles => best_single(self.available(side))?.into(),
        };
        debug!(event = "recommend_first", %side, recommendation = %selection);
        Ok(selection)
    }

    /// Recommends `side`'s answer to the opposing first selection.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidSelectionSize`] when `first` doesn't
    /// match the format, or [`DraftError::EmptyPool`] when too few players
    /// remain.
    pub fn recommend_counter(
        &self,
        side: Side,
        first: &Selection,
        weight: BalanceWeight,
    ) -> Result<Selection> {
        self.check_selection_size(first)?;
        let pool = self.available(side);
        let selection: Selection = match self.format {
            Format::BestBall => best_counter_pair(pool, first.players(), weight)?.into(),
            Format::Singles => best_counter_single(pool, first.players())?.into(),
        };
        debug!(event = "recommend_counter", %side, recommendation = %selection);
        Ok(selection)
    }

    /// Locks a match in: the first side's selection against the answer.
    ///
    /// Accepts any valid selections, recommended or manually overridden.
    /// Atomic: on any error nothing changes. On success the match record is
    /// appended, the players leave both remaining pools, and the round
    /// advances.
    ///
    /// # Errors
    ///
    /// - [`DraftError::DraftComplete`] when every round is already locked
    /// - [`DraftError::InvalidSelectionSize`] when a selection doesn't
    ///   match the format's group size
    /// - [`DraftError::PlayerNotAvailable`] when a selected player is
    ///   already used or unknown on their side
    pub fn lock_in(
        &mut self,
        first_side: Side,
        first: Selection,
        second: Selection,
    ) -> Result<MatchRecord> {
        if self.round > self.limit {
            return Err(DraftError::DraftComplete { limit: self.limit });
        }
        self.check_selection_size(&first)?;
        self.check_selection_size(&second)?;

        let second_side = first_side.opponent();
        self.check_available(first_side, &first)?;
        self.check_available(second_side, &second)?;

        let record = MatchRecord {
            round: self.round,
            first_side,
            first,
            second_side,
            second,
        };
        Self::remove_players(self.pool_mut(first_side), record.first.players());
        Self::remove_players(self.pool_mut(second_side), record.second.players());
        self.matches.push(record.clone());
        self.round += 1;

        info!(
            event = "lock_in",
            round = record.round,
            first_side = %record.first_side,
            first = %record.first,
            second_side = %record.second_side,
            second = %record.second,
        );
        Ok(record)
    }

    /// Clears history and restores both rosters; the round returns to 1.
    ///
    /// Valid in any state and always succeeds.
    pub fn reset(&mut self) {
        self.remaining_a = self.roster_a.iter().cloned().collect();
        self.remaining_b = self.roster_b.iter().cloned().collect();
        self.matches.clear();
        self.round = 1;
        info!(event = "reset", limit = self.limit);
    }

    fn check_selection_size(&self, selection: &Selection) -> Result<()> {
        let expected = self.format.group_size();
        if selection.len() != expected {
            return Err(DraftError::InvalidSelectionSize {
                expected,
                actual: selection.len(),
            });
        }
        Ok(())
    }

    fn check_available(&self, side: Side, selection: &Selection) -> Result<()> {
        let pool = self.available(side);
        for player in selection.players() {
            if !pool.iter().any(|p| p.name() == player.name()) {
                return Err(DraftError::PlayerNotAvailable {
                    side,
                    name: player.name().to_string(),
                });
            }
        }
        Ok(())
    }

    fn pool_mut(&mut self, side: Side) -> &mut Pool {
        match side {
            Side::A => &mut self.remaining_a,
            Side::B => &mut self.remaining_b,
        }
    }

    fn remove_players(pool: &mut Pool, used: &[Player]) {
        pool.retain(|p| !used.iter().any(|u| u.name() == p.name()));
    }
}
