//! settings that can change between runs without recompiling
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Runtime configuration for a game. Board dimensions are part of the board's
/// type, so all that remains is how to seed the reward placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for a reproducible game, None draws a seed from the operating system
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration that always plays out the same way
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// parse a configuration from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
