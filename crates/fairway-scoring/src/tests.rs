//! Tests for the scoring functions.

use super::*;
use fairway_test::{side_a_roster, side_b_roster, tiny_side_a, tiny_side_b};

const EPS: f64 = 1e-9;

#[test]
fn test_average_handicap_single() {
    let group = [Player::new("Dmac", 5.7)];
    assert!((average_handicap(&group).unwrap() - 5.7).abs() < EPS);
}

#[test]
fn test_average_handicap_pair() {
    assert!((average_handicap(&tiny_side_a()).unwrap() - 15.0).abs() < EPS);
    assert!((average_handicap(&tiny_side_b()).unwrap() - 15.0).abs() < EPS);
}

#[test]
fn test_average_handicap_empty_pool() {
    let err = average_handicap(&[]).unwrap_err();
    assert_eq!(
        err,
        DraftError::EmptyPool {
            needed: 1,
            available: 0
        }
    );
}

#[test]
fn test_internal_balance_identical_handicaps() {
    let pair = Pair::new(Player::new("X", 12.0), Player::new("Y", 12.0)).unwrap();
    assert!((internal_balance(&pair) - 1.0).abs() < EPS);
}

#[test]
fn test_internal_balance_known_spread() {
    // Spread of 9 over a 36 normalization gives 0.75.
    let pair = Pair::new(Player::new("X", 3.0), Player::new("Y", 12.0)).unwrap();
    assert!((internal_balance(&pair) - 0.75).abs() < EPS);
}

#[test]
fn test_internal_balance_not_clamped_below_zero() {
    let pair = Pair::new(Player::new("X", -5.0), Player::new("Y", 40.0)).unwrap();
    assert!(internal_balance(&pair) < 0.0);
}

#[test]
fn test_cross_evenness_equal_averages() {
    let evenness = cross_evenness(&tiny_side_a(), &tiny_side_b()).unwrap();
    assert!((evenness - 1.0).abs() < EPS);
}

#[test]
fn test_cross_evenness_known_gap() {
    let x = [Player::new("X", 18.0)];
    let y = [Player::new("Y", 9.0)];
    assert!((cross_evenness(&x, &y).unwrap() - 0.75).abs() < EPS);
}

#[test]
fn test_stroke_advantage_sign() {
    let x = [Player::new("X", 18.0)];
    let y = [Player::new("Y", 9.0)];
    assert!((stroke_advantage(&x, &y).unwrap() - 9.0).abs() < EPS);
    assert!((stroke_advantage(&y, &x).unwrap() + 9.0).abs() < EPS);
}

#[test]
fn test_stroke_advantage_antisymmetric_over_rosters() {
    let a = side_a_roster();
    let b = side_b_roster();
    for x in a.chunks(2) {
        for y in b.chunks(2) {
            let forward = stroke_advantage(x, y).unwrap();
            let backward = stroke_advantage(y, x).unwrap();
            assert!((forward + backward).abs() < EPS);
        }
    }
}

#[test]
fn test_stroke_advantage_zero_for_matched_averages() {
    let adv = stroke_advantage(&tiny_side_b(), &tiny_side_a()).unwrap();
    assert!(adv.abs() < EPS);
}

#[test]
fn test_stroke_advantage_empty_group() {
    assert!(stroke_advantage(&[], &tiny_side_a()).is_err());
    assert!(stroke_advantage(&tiny_side_a(), &[]).is_err());
}
