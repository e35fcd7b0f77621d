use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Standard number of finished round trips that wins the game.
pub const DEFAULT_EXITS_TO_WIN: u32 = 4;

/// Tunable rules. The speed tables are fixed and live in [`crate::board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Exits needed to win (1..=5, each side has five pieces).
    pub exits_to_win: u32,
    /// Keep the per-destination move history.
    pub record_history: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        RulesConfig {
            exits_to_win: DEFAULT_EXITS_TO_WIN,
            record_history: true,
        }
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.exits_to_win) {
            return Err(ConfigError::Validation(format!(
                "exits_to_win must be in 1..=5, got {}",
                self.exits_to_win
            )));
        }
        Ok(())
    }
}
