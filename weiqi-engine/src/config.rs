use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MIN_SIZE: u8 = 2;
pub const MAX_SIZE: u8 = 25;
pub const DEFAULT_SIZE: u8 = 8;

/// Settings fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: DEFAULT_SIZE }
    }
}

impl GameConfig {
    pub fn new(size: u8) -> Result<Self, ConfigError> {
        let config = GameConfig { size };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object such as `{"size": 9}`. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }
}
