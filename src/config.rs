use serde::{Deserialize, Serialize};

use crate::types::Controller;

/// How the automated opponent picks which piece to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomatedPolicy {
    /// Pick one piece uniformly at random; if it is blocked, skip the turn.
    #[default]
    ChosenPieceOnly,
    /// Pick uniformly among pieces that have at least one legal move.
    AnyMovablePiece,
}

/// Per-game settings supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub automated_policy: AutomatedPolicy,
    /// Refuse every request once a side has won.
    pub freeze_on_win: bool,
    pub black: Controller,
    pub green: Controller,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            automated_policy: AutomatedPolicy::default(),
            freeze_on_win: true,
            black: Controller::Human,
            green: Controller::Human,
        }
    }
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
