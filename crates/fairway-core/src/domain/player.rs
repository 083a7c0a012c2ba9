//! Player type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rostered player: a name unique within their side, and a handicap.
///
/// Handicaps may be negative for better-than-scratch players. Players are
/// immutable once loaded; identity within a side is by name.
///
/// # Examples
///
/// ```
/// use fairway_core::Player;
///
/// let p = Player::new("Sean", 1.4);
/// assert_eq!(p.name(), "Sean");
/// assert_eq!(p.handicap(), 1.4);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    name: String,
    handicap: f64,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, handicap: f64) -> Self {
        Player {
            name: name.into(),
            handicap,
        }
    }

    /// Returns the player's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's handicap.
    #[inline]
    pub fn handicap(&self) -> f64 {
        self.handicap
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.handicap)
    }
}
