use crate::ai::{GameRng, MoveSelector};
use crate::board::Board;
use crate::config::AutomatedPolicy;
use crate::rules;
use crate::types::{Move, Position, Side};

/// Uniformly random opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMoveSelector {
    policy: AutomatedPolicy,
}

impl RandomMoveSelector {
    pub fn new(policy: AutomatedPolicy) -> Self {
        Self { policy }
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Move> {
        let (from, targets) = match self.policy {
            AutomatedPolicy::ChosenPieceOnly => {
                let pieces: Vec<Position> =
                    board.pieces(side).map(|piece| piece.position()).collect();
                let from = *rng.choose(&pieces)?;
                (from, rules::legal_targets(board, from))
            }
            AutomatedPolicy::AnyMovablePiece => {
                let moves = rules::legal_moves(board, side);
                let mut movable: Vec<Position> = moves.iter().map(|mv| mv.from).collect();
                movable.dedup();
                let from = *rng.choose(&movable)?;
                let targets: Vec<Position> = moves.iter().filter(|mv| mv.from == from).map(|mv| mv.to).collect();
                (from, targets)
            }
        };

        let to = *rng.choose(&targets)?;
        Some(Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Side, u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(side, row, col) in pieces {
            board.place(side, row, col).unwrap();
        }
        board
    }

    #[test]
    fn selected_moves_are_always_legal() {
        let board = Board::new();
        let selector = RandomMoveSelector::default();
        let mut rng = GameRng::new(3);

        for side in Side::ALL {
            for _ in 0..200 {
                // Back-row pieces are blocked, so `None` is expected sometimes.
                if let Some(mv) = selector.select_move(&board, side, &mut rng) {
                    assert!(rules::is_legal(&board, mv.from, mv.to));
                    assert_eq!(board.get(mv.from).map(|p| p.side), Some(side));
                }
            }
        }
    }

    #[test]
    fn blocked_chosen_piece_yields_no_move() {
        // Black at (1,0) is boxed in by its own pieces; (6,6) is free.
        let board = board_with(&[
            (Side::Black, 1, 0),
            (Side::Black, 2, 0),
            (Side::Black, 2, 1),
            (Side::Black, 6, 6),
        ]);
        let selector = RandomMoveSelector::new(AutomatedPolicy::ChosenPieceOnly);
        let mut rng = GameRng::new(11);

        let outcomes: Vec<Option<Move>> = (0..100)
            .map(|_| selector.select_move(&board, Side::Black, &mut rng))
            .collect();

        assert!(outcomes.iter().any(Option::is_none));
        assert!(outcomes.iter().any(Option::is_some));
    }

    #[test]
    fn any_movable_piece_never_skips_when_a_move_exists() {
        let board = board_with(&[
            (Side::Black, 1, 0),
            (Side::Black, 2, 0),
            (Side::Black, 2, 1),
            (Side::Black, 6, 6),
        ]);
        let selector = RandomMoveSelector::new(AutomatedPolicy::AnyMovablePiece);
        let mut rng = GameRng::new(11);

        for _ in 0..100 {
            let mv = selector.select_move(&board, Side::Black, &mut rng);
            assert!(mv.is_some());
        }
    }

    #[test]
    fn no_pieces_or_no_moves_yields_none() {
        let selector = RandomMoveSelector::new(AutomatedPolicy::AnyMovablePiece);
        let mut rng = GameRng::new(0);

        assert_eq!(selector.select_move(&Board::empty(), Side::Green, &mut rng), None);

        let stuck = board_with(&[(Side::Green, 0, 4)]);
        assert_eq!(selector.select_move(&stuck, Side::Green, &mut rng), None);
    }
}
