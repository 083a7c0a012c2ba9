//! Draft configuration for the fairway engine.
//!
//! Load rosters, format and the balance weight from TOML or YAML files so
//! trips can be set up without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use fairway_config::DraftConfig;
//! use fairway_core::Format;
//!
//! let config = DraftConfig::from_toml_str(r#"
//!     format = "singles"
//!     balance_weight = 0.7
//!
//!     [team_a]
//!     name = "Atown"
//!     players = [
//!         { name = "Sean", handicap = 1.4 },
//!         { name = "Tom", handicap = 14.2 },
//!     ]
//!
//!     [team_b]
//!     name = "Pittsburgh"
//!     players = [
//!         { name = "Dmac", handicap = 5.7 },
//!         { name = "Bman", handicap = 3.8 },
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(config.format, Format::Singles);
//! assert_eq!(config.team_a.players.len(), 2);
//! ```
//!
//! Use the built-in trip rosters when no file exists:
//!
//! ```
//! use fairway_config::DraftConfig;
//!
//! let config = DraftConfig::load("draft.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fairway_core::{BalanceWeight, Format, Player};

#[cfg(test)]
mod tests;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Full draft configuration: format, balance weight and both rosters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DraftConfig {
    /// Draft format, best ball by default.
    #[serde(default)]
    pub format: Format,

    /// Mixing weight between competitive terms and internal balance.
    #[serde(default = "default_balance_weight")]
    pub balance_weight: f64,

    /// Side A's team.
    pub team_a: TeamConfig,

    /// Side B's team.
    pub team_b: TeamConfig,
}

fn default_balance_weight() -> f64 {
    0.5
}

/// One team: a display name and its roster.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TeamConfig {
    /// Display name for the team.
    pub name: String,

    /// The team's roster in draft order.
    pub players: Vec<Player>,
}

impl DraftConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the draft format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the balance weight.
    pub fn with_balance_weight(mut self, weight: f64) -> Self {
        self.balance_weight = weight;
        self
    }

    /// Returns the validated balance weight.
    pub fn weight(&self) -> Result<BalanceWeight, ConfigError> {
        BalanceWeight::new(self.balance_weight)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks the configuration for a playable draft.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the weight is out of range, the
    /// rosters are empty or unequal, a roster doesn't divide evenly into the
    /// format's group size, or a side repeats a player name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weight()?;

        let len_a = self.team_a.players.len();
        let len_b = self.team_b.players.len();
        if len_a == 0 || len_b == 0 {
            return Err(ConfigError::Invalid("rosters must not be empty".into()));
        }
        if len_a != len_b {
            return Err(ConfigError::Invalid(format!(
                "rosters must be the same size ({len_a} vs {len_b})"
            )));
        }
        if len_a % self.format.group_size() != 0 {
            return Err(ConfigError::Invalid(format!(
                "a {} roster of {len_a} players can't be split into groups of {}",
                self.format,
                self.format.group_size()
            )));
        }
        for team in [&self.team_a, &self.team_b] {
            for (i, player) in team.players.iter().enumerate() {
                if team.players[..i].iter().any(|p| p.name() == player.name()) {
                    return Err(ConfigError::Invalid(format!(
                        "team '{}' lists player '{}' twice",
                        team.name,
                        player.name()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for DraftConfig {
    /// The trip's built-in rosters: Atown against Pittsburgh, best ball.
    fn default() -> Self {
        DraftConfig {
            format: Format::BestBall,
            balance_weight: default_balance_weight(),
            team_a: TeamConfig {
                name: "Atown".into(),
                players: vec![
                    Player::new("Farley", 19.0),
                    Player::new("Fil", 28.7),
                    Player::new("Sean", 1.4),
                    Player::new("Tom", 14.2),
                    Player::new("Alexandra", 9.4),
                    Player::new("Pail", 22.3),
                    Player::new("Greg", 13.7),
                    Player::new("Zimmel", 20.6),
                ],
            },
            team_b: TeamConfig {
                name: "Pittsburgh".into(),
                players: vec![
                    Player::new("Adawg Maize", 12.6),
                    Player::new("Beans Kujava", 16.3),
                    Player::new("Jerry Curl", 13.3),
                    Player::new("Pat Swag", 16.9),
                    Player::new("Dmac", 5.7),
                    Player::new("Oobs", 11.9),
                    Player::new("Ribs McClure", 17.9),
                    Player::new("Bman", 3.8),
                ],
            },
        }
    }
}
