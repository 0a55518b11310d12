use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::setup;
use crate::zobrist;

pub const MAX_BOARD_SIZE: u8 = 25;

/// Parameters for starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub handicap: u8,
    pub zobrist_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 19,
            cols: 19,
            handicap: 0,
            zobrist_seed: zobrist::DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn new(rows: u8, cols: u8) -> Self {
        GameConfig {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        for (name, size) in [("rows", self.rows), ("cols", self.cols)] {
            if size == 0 || size > MAX_BOARD_SIZE {
                return Err(GoError::Config(format!(
                    "{name} must be between 1 and {MAX_BOARD_SIZE}, got {size}"
                )));
            }
        }
        if self.handicap > 0
            && setup::handicap_points(self.rows, self.cols, self.handicap).is_none()
        {
            return Err(GoError::Config(format!(
                "handicap {} not supported on {}x{}",
                self.handicap, self.rows, self.cols
            )));
        }
        Ok(())
    }
}
