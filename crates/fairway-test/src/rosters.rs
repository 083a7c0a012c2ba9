//! Canned rosters for tests.

use fairway_core::Player;

/// The trip's side-A roster: eight players with a wide handicap spread.
pub fn side_a_roster() -> Vec<Player> {
    vec![
        Player::new("Farley", 19.0),
        Player::new("Fil", 28.7),
        Player::new("Sean", 1.4),
        Player::new("Tom", 14.2),
        Player::new("Alexandra", 9.4),
        Player::new("Pail", 22.3),
        Player::new("Greg", 13.7),
        Player::new("Zimmel", 20.6),
    ]
}

/// The trip's side-B roster.
pub fn side_b_roster() -> Vec<Player> {
    vec![
        Player::new("Adawg Maize", 12.6),
        Player::new("Beans Kujava", 16.3),
        Player::new("Jerry Curl", 13.3),
        Player::new("Pat Swag", 16.9),
        Player::new("Dmac", 5.7),
        Player::new("Oobs", 11.9),
        Player::new("Ribs McClure", 17.9),
        Player::new("Bman", 3.8),
    ]
}

/// Two-player side-A roster with a known average of 15.0.
pub fn tiny_side_a() -> Vec<Player> {
    vec![Player::new("P1", 10.0), Player::new("P2", 20.0)]
}

/// Two-player side-B roster, also averaging 15.0.
pub fn tiny_side_b() -> Vec<Player> {
    vec![Player::new("Q1", 12.0), Player::new("Q2", 18.0)]
}
