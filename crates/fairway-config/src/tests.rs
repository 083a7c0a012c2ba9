//! Tests for draft configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        format = "best_ball"
        balance_weight = 0.25

        [team_a]
        name = "Atown"
        players = [
            { name = "Sean", handicap = 1.4 },
            { name = "Tom", handicap = 14.2 },
        ]

        [team_b]
        name = "Pittsburgh"
        players = [
            { name = "Dmac", handicap = 5.7 },
            { name = "Bman", handicap = 3.8 },
        ]
    "#;

    let config = DraftConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.format, Format::BestBall);
    assert_eq!(config.balance_weight, 0.25);
    assert_eq!(config.team_a.players[0].name(), "Sean");
    assert_eq!(config.team_b.players[1].handicap(), 3.8);
    config.validate().unwrap();
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        format: singles
        balance_weight: 0.9
        team_a:
          name: Atown
          players:
            - name: Sean
              handicap: 1.4
        team_b:
          name: Pittsburgh
          players:
            - name: Dmac
              handicap: 5.7
    "#;

    let config = DraftConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.format, Format::Singles);
    assert_eq!(config.balance_weight, 0.9);
    config.validate().unwrap();
}

#[test]
fn test_defaults_applied() {
    let toml = r#"
        [team_a]
        name = "A"
        players = [
            { name = "X", handicap = 4.0 },
            { name = "Y", handicap = 8.0 },
        ]

        [team_b]
        name = "B"
        players = [
            { name = "V", handicap = 6.0 },
            { name = "W", handicap = 7.0 },
        ]
    "#;

    let config = DraftConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.format, Format::BestBall);
    assert_eq!(config.balance_weight, 0.5);
}

#[test]
fn test_builder() {
    let config = DraftConfig::default()
        .with_format(Format::Singles)
        .with_balance_weight(0.8);

    assert_eq!(config.format, Format::Singles);
    assert_eq!(config.balance_weight, 0.8);
    config.validate().unwrap();
}

#[test]
fn test_default_rosters_validate() {
    let config = DraftConfig::default();
    assert_eq!(config.team_a.players.len(), 8);
    assert_eq!(config.team_b.players.len(), 8);
    config.validate().unwrap();
}

#[test]
fn test_validate_rejects_out_of_range_weight() {
    let config = DraftConfig::default().with_balance_weight(1.5);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_unequal_rosters() {
    let mut config = DraftConfig::default();
    config.team_b.players.pop();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_odd_best_ball_roster() {
    let mut config = DraftConfig::default();
    config.team_a.players.pop();
    config.team_b.players.pop();
    // 7 players per side can't form best-ball pairs.
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let mut config = DraftConfig::default();
    config.team_a.players[1] = Player::new("Farley", 12.0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_odd_roster_is_fine_for_singles() {
    let mut config = DraftConfig::default().with_format(Format::Singles);
    config.team_a.players.pop();
    config.team_b.players.pop();
    config.validate().unwrap();
}
