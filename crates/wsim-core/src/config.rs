//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::combat::HitTable;
use crate::error::{Result, WsimError};
use crate::wind::WindDirection;

/// Configuration for a [`Game`](crate::game::Game).
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides:
///
/// ```
/// use wsim_core::config::GameConfig;
/// use wsim_core::wind::WindDirection;
///
/// let config = GameConfig::from_json(r#"{ "wind": "SW", "seed": 7 }"#).unwrap();
/// assert_eq!(config.wind, WindDirection::SW);
/// assert_eq!(config.board_size, (10, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width and height in hexes. Reserved for boundary checks.
    pub board_size: (u32, u32),
    /// Wind at the start of the game
    pub wind: WindDirection,
    /// Seed for the game's dice
    pub seed: u64,
    /// Gunnery rules
    pub hit_table: HitTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: (10, 10),
            wind: WindDirection::N,
            seed: 0,
            hit_table: HitTable::default(),
        }
    }
}

impl GameConfig {
    /// Creates a default config with the given board size.
    #[must_use]
    pub fn with_board_size(width: u32, height: u32) -> Self {
        Self {
            board_size: (width, height),
            ..Default::default()
        }
    }

    /// Parses a config from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WsimError::Config(e.to_string()))
    }
}
