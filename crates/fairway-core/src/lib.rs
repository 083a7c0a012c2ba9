//! Fairway Core - Domain types for golf trip draft pairing
//!
//! This crate provides the fundamental types shared by the fairway crates:
//! - Players, sides, pairs and selections
//! - Match records and draft formats
//! - The shared [`DraftError`] type

pub mod domain;
pub mod error;

pub use domain::{BalanceWeight, Format, MatchRecord, Pair, Player, RoundState, Selection, Side};
pub use error::{DraftError, Result};
