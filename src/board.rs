use crate::error::BoundsError;
use crate::types::{BOARD_SIZE, Piece, Position, Side};

const SIZE: usize = BOARD_SIZE as usize;
const NUM_SQUARES: usize = SIZE * SIZE;
const SETUP_ROWS: u8 = 2;

/// 8x8 grid of optional pieces. Each cell owns the piece standing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Creates the starting position:
    /// rows 0-1 black, rows 6-7 green.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Clears the grid and repopulates the starting position.
    pub fn initialize(&mut self) {
        self.clear();
        for row in 0..BOARD_SIZE {
            let side = if row < SETUP_ROWS {
                Side::Black
            } else if row >= BOARD_SIZE - SETUP_ROWS {
                Side::Green
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                self.cells[row as usize][col as usize] = Some(Piece { row, col, side });
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
    }

    /// Returns the occupant of `(row, col)`.
    pub fn piece_at(&self, row: u8, col: u8) -> Result<Option<&Piece>, BoundsError> {
        let pos = Position::new(row, col)?;
        Ok(self.get(pos))
    }

    pub fn get(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.row as usize][pos.col as usize].as_ref()
    }

    /// Puts a piece of `side` on `(row, col)`, returning whatever stood there.
    pub fn place(&mut self, side: Side, row: u8, col: u8) -> Result<Option<Piece>, BoundsError> {
        Position::new(row, col)?;
        let cell = &mut self.cells[row as usize][col as usize];
        Ok(cell.replace(Piece { row, col, side }))
    }

    /// Empties `(row, col)`, returning the removed piece.
    pub fn remove(&mut self, row: u8, col: u8) -> Result<Option<Piece>, BoundsError> {
        Position::new(row, col)?;
        Ok(self.cells[row as usize][col as usize].take())
    }

    /// Moves the piece on `from` to `to`, updating its stored coordinates.
    /// Returns the piece previously standing on `to`, if any.
    /// Does nothing when `from` is empty.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let mut piece = self.cells[from.row as usize][from.col as usize].take()?;
        piece.row = to.row;
        piece.col = to.col;
        self.cells[to.row as usize][to.col as usize].replace(piece)
    }

    /// Iterates over the pieces of `side` in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(move |piece| piece.side == side)
    }

    /// Returns `(black_count, green_count)`.
    pub fn count(&self) -> (u8, u8) {
        (
            self.pieces(Side::Black).count() as u8,
            self.pieces(Side::Green).count() as u8,
        )
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=green.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for piece in self.cells.iter().flatten().flatten() {
            board[piece.position().index()] = piece.side.code();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
