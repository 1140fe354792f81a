//! Move legality for Breakthrough.
//!
//! A piece steps exactly one rank toward the opponent, straight or diagonally,
//! onto an empty square or onto an opposing piece (capture).

use crate::board::Board;
use crate::types::{Move, Position, Side};

/// Returns whether the piece on `from` may step to `to`.
/// Always `false` when `from` is empty.
pub fn is_legal(board: &Board, from: Position, to: Position) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    if let Some(target) = board.get(to)
        && target.side == piece.side
    {
        return false;
    }

    let d_row = to.row as i8 - from.row as i8;
    let d_col = to.col as i8 - from.col as i8;

    d_row == piece.side.forward() && d_col.abs() <= 1
}

/// Legal destinations for the piece on `from`, scanning its 3x3 neighborhood.
pub fn legal_targets(board: &Board, from: Position) -> Vec<Position> {
    let mut targets = Vec::new();
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if let Some(to) = from.offset(d_row, d_col)
                && is_legal(board, from, to)
            {
                targets.push(to);
            }
        }
    }
    targets
}

/// Every legal move for `side`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|piece| {
            let from = piece.position();
            legal_targets(board, from)
                .into_iter()
                .map(move |to| Move { from, to })
        })
        .collect()
}

/// Whether a `side` piece landing on `row` has broken through.
pub fn is_breakthrough(side: Side, row: u8) -> bool {
    row == side.goal_row()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board_with(pieces: &[(Side, u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(side, row, col) in pieces {
            board.place(side, row, col).unwrap();
        }
        board
    }

    #[test]
    fn black_steps_forward_straight_or_diagonal() {
        let board = board_with(&[(Side::Black, 1, 3)]);

        assert!(is_legal(&board, pos(1, 3), pos(2, 2)));
        assert!(is_legal(&board, pos(1, 3), pos(2, 3)));
        assert!(is_legal(&board, pos(1, 3), pos(2, 4)));
    }

    #[test]
    fn rejects_jumps_sideways_backward_and_wide_steps() {
        let board = board_with(&[(Side::Black, 1, 3)]);

        assert!(!is_legal(&board, pos(1, 3), pos(3, 3)));
        assert!(!is_legal(&board, pos(1, 3), pos(1, 4)));
        assert!(!is_legal(&board, pos(1, 3), pos(0, 3)));
        assert!(!is_legal(&board, pos(1, 3), pos(2, 5)));
        assert!(!is_legal(&board, pos(1, 3), pos(1, 3)));
    }

    #[test]
    fn green_moves_toward_row_zero() {
        let board = board_with(&[(Side::Green, 6, 0)]);

        assert_eq!(legal_targets(&board, pos(6, 0)), vec![pos(5, 0), pos(5, 1)]);
        assert!(!is_legal(&board, pos(6, 0), pos(7, 0)));
    }

    #[test]
    fn capture_only_onto_opposing_piece() {
        let board = board_with(&[
            (Side::Black, 1, 3),
            (Side::Green, 2, 4),
            (Side::Black, 2, 2),
        ]);

        assert!(is_legal(&board, pos(1, 3), pos(2, 4)));
        assert!(!is_legal(&board, pos(1, 3), pos(2, 2)));
        assert_eq!(legal_targets(&board, pos(1, 3)), vec![pos(2, 3), pos(2, 4)]);
    }

    #[test]
    fn empty_source_has_no_moves() {
        let board = Board::empty();

        assert!(!is_legal(&board, pos(3, 3), pos(4, 3)));
        assert!(legal_targets(&board, pos(3, 3)).is_empty());
    }

    #[test]
    fn starting_position_has_22_moves_per_side() {
        let board = Board::new();

        // Front row only: 8 straight + 14 diagonal.
        assert_eq!(legal_moves(&board, Side::Black).len(), 22);
        assert_eq!(legal_moves(&board, Side::Green).len(), 22);
    }

    #[test]
    fn breakthrough_rows() {
        assert!(is_breakthrough(Side::Black, 7));
        assert!(!is_breakthrough(Side::Black, 6));
        assert!(is_breakthrough(Side::Green, 0));
        assert!(!is_breakthrough(Side::Green, 1));
    }
}
