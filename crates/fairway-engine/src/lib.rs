//! Fairway Engine - pairing recommendations and the draft session.
//!
//! Two layers:
//! - [`selector`] - pure functions that enumerate every candidate pair (or
//!   single) from a pool and return the top scorer under a balance weight
//! - [`session`] - the [`DraftSession`] state machine that tracks rounds,
//!   locked matches and each side's remaining players
//!
//! Logging levels:
//! - **INFO**: lock-ins and resets
//! - **DEBUG**: chosen recommendations with their score
//! - **TRACE**: per-candidate evaluation details

pub mod selector;
pub mod session;

pub use selector::{best_counter_pair, best_counter_single, best_pair, best_single};
pub use session::DraftSession;
