//! fairway - golf trip draft pairing recommendations.
//!
//! Build a [`DraftSession`] from two rosters (or a [`DraftConfig`] file),
//! ask it to recommend pairings, and lock matches in round by round.
//!
//! # Example
//!
//! ```rust
//! use fairway::prelude::*;
//!
//! let config = DraftConfig::default();
//! let mut session = DraftSession::from_config(&config).unwrap();
//!
//! let sender = session.sending_side();
//! let weight = config.weight().unwrap();
//! let first = session.recommend_first(sender, weight).unwrap();
//! let second = session
//!     .recommend_counter(sender.opponent(), &first, weight)
//!     .unwrap();
//! let record = session.lock_in(sender, first, second).unwrap();
//! assert_eq!(record.round, 1);
//! ```

// Domain types
pub use fairway_core::{
    BalanceWeight, DraftError, Format, MatchRecord, Pair, Player, Result, RoundState, Selection,
    Side,
};

// Scoring functions
pub use fairway_scoring::{
    average_handicap, cross_evenness, internal_balance, stroke_advantage, HANDICAP_SPREAD,
};

// Configuration
pub use fairway_config::{ConfigError, DraftConfig, TeamConfig};

// Engine
pub use fairway_engine::{
    best_counter_pair, best_counter_single, best_pair, best_single, DraftSession,
};

pub mod prelude {
    pub use super::{
        BalanceWeight, DraftConfig, DraftError, DraftSession, Format, MatchRecord, Pair, Player,
        RoundState, Selection, Side,
    };
}
