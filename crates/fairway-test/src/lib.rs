//! Shared test fixtures for the fairway crates.
//!
//! Provides canned rosters so scoring, selector and session tests agree on
//! their data. Add as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! fairway-test = { workspace = true }
//! ```

pub mod rosters;

pub use rosters::{side_a_roster, side_b_roster, tiny_side_a, tiny_side_b};
