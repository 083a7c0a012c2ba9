//! Pairs, selections and locked match records.

use std::fmt;
use std::slice;

use crate::domain::{Player, Side};
use crate::error::{DraftError, Result};

/// An unordered pairing of two distinct players from the same side.
///
/// # Examples
///
/// ```
/// use fairway_core::{Pair, Player};
///
/// let pair = Pair::new(Player::new("Tom", 14.2), Player::new("Greg", 13.7)).unwrap();
/// assert_eq!(pair.players().len(), 2);
///
/// // A pair must hold two distinct players.
/// let dup = Pair::new(Player::new("Tom", 14.2), Player::new("Tom", 14.2));
/// assert!(dup.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pair {
    players: [Player; 2],
}

impl Pair {
    /// Creates a pair, rejecting two players with the same name.
    pub fn new(first: Player, second: Player) -> Result<Self> {
        if first.name() == second.name() {
            return Err(DraftError::InvalidSelectionSize {
                expected: 2,
                actual: 1,
            });
        }
        Ok(Pair {
            players: [first, second],
        })
    }

    /// Returns the two members in construction order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Absolute handicap spread between the two members.
    #[inline]
    pub fn spread(&self) -> f64 {
        (self.players[0].handicap() - self.players[1].handicap()).abs()
    }
}

impl PartialEq for Pair {
    /// Order-insensitive: `{a, b}` equals `{b, a}`.
    fn eq(&self, other: &Self) -> bool {
        let [a, b] = &self.players;
        let [c, d] = &other.players;
        (a == c && b == d) || (a == d && b == c)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.players[0], self.players[1])
    }
}

/// One side's commitment to a match: a single player or a pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(Player),
    Pair(Pair),
}

impl Selection {
    /// Returns the 1–2 selected players as a slice.
    pub fn players(&self) -> &[Player] {
        match self {
            Selection::Single(player) => slice::from_ref(player),
            Selection::Pair(pair) => pair.players(),
        }
    }

    /// Number of players in the selection.
    #[inline]
    pub fn len(&self) -> usize {
        self.players().len()
    }

    /// True when the selection holds no players. Always false today; kept
    /// for the conventional `len`/`is_empty` contract.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(player) => player.fmt(f),
            Selection::Pair(pair) => pair.fmt(f),
        }
    }
}

impl From<Pair> for Selection {
    fn from(pair: Pair) -> Self {
        Selection::Pair(pair)
    }
}

impl From<Player> for Selection {
    fn from(player: Player) -> Self {
        Selection::Single(player)
    }
}

/// A locked-in match: which side sent first, and both final selections.
///
/// Records are append-only; the session never mutates them after lock-in.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    /// Round in which the match was locked, starting at 1.
    pub round: u32,
    /// Side that committed its selection first.
    pub first_side: Side,
    /// The first side's selection.
    pub first: Selection,
    /// Side that answered.
    pub second_side: Side,
    /// The answering side's selection.
    pub second: Selection,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round {}: {} sent {} | {} countered {}",
            self.round, self.first_side, self.first, self.second_side, self.second
        )
    }
}
