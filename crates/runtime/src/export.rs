//! JSON export of a game session.

use serde::{Deserialize, Serialize};

use sideline_core::GameState;

use crate::api::Result;
use crate::log::PlayLogEntry;
use crate::summary::GameSummary;

/// Everything needed to rebuild the scoresheet after the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameExport {
    pub home: String,
    pub away: String,
    pub state: GameState,
    pub summary: GameSummary,
    #[serde(default)]
    pub halftime: Option<GameSummary>,
    pub log: Vec<PlayLogEntry>,
}

impl GameExport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
