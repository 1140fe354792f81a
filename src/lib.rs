use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use config::{AutomatedPolicy, GameConfig};
pub use error::BoundsError;
pub use game::GameInstance;
pub use types::{
    Controller, GameState, Move, MoveOutcome, Piece, PlayerInfo, Position, Side,
    Terminal, WinReason,
};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
