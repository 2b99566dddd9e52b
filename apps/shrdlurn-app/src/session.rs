use serde::{Deserialize, Serialize};
use shrdlurn_core::{Block, HistoryEntry};

/// The part of the game's state the setting reads and writes back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub history: Vec<HistoryEntry>,
    #[serde(rename = "currentState")]
    pub current_state: Vec<Block>,
}

impl GameSession {
    pub fn new(history: Vec<HistoryEntry>, current_state: Vec<Block>) -> Self {
        Self {
            history,
            current_state,
        }
    }

    pub fn step(&self, step_n: u32) -> Option<&HistoryEntry> {
        self.history.iter().find(|h| h.step_n == step_n)
    }
}
