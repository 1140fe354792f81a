pub mod random;
pub mod rng;

use crate::board::Board;
use crate::types::{Move, Side};

pub use random::RandomMoveSelector;
pub use rng::GameRng;

/// Chooses the automated side's next move.
///
/// Returning `None` means the side makes no move this turn.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Move>;
}
