use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoundsError;

pub const BOARD_SIZE: u8 = 8;
pub const STARTING_PIECES: u8 = 16;

/// One of the two opposing colors.
///
/// `Black` sets up on rows 0-1 and advances toward row 7,
/// `Green` sets up on rows 6-7 and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    Green,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Black, Side::Green];

    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::Green,
            Self::Green => Self::Black,
        }
    }

    /// Row delta of a single step for this side.
    pub fn forward(self) -> i8 {
        match self {
            Self::Black => 1,
            Self::Green => -1,
        }
    }

    /// The rank a piece of this side has to reach to break through.
    pub fn goal_row(self) -> u8 {
        match self {
            Self::Black => BOARD_SIZE - 1,
            Self::Green => 0,
        }
    }

    /// Cell encoding used by [`GameState::board`]: 1=black, 2=green.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::Green => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("Black"),
            Self::Green => f.write_str("Green"),
        }
    }
}

/// A board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, BoundsError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoundsError {
                row: row as i32,
                col: col as i32,
            });
        }
        Ok(Self { row, col })
    }

    /// Accepts raw input coordinates, e.g. derived from pointer positions.
    pub fn from_signed(row: i32, col: i32) -> Result<Self, BoundsError> {
        let size = BOARD_SIZE as i32;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(BoundsError { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Offsets this position, returning `None` when the result leaves the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece on the board. Its stored coordinates always match the cell holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub side: Side,
}

impl Piece {
    pub fn position(&self) -> Position {
        Position {
            row: self.row,
            col: self.col,
        }
    }
}

/// A single step from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

/// Who drives a side's moves.
/// Serialized with the banner labels `"Human"` / `"AI"`; the lowercase
/// variant names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Controller {
    #[default]
    #[serde(rename = "Human", alias = "human")]
    Human,
    #[serde(rename = "AI", alias = "automated")]
    Automated,
}

impl Controller {
    pub fn toggled(self) -> Self {
        match self {
            Self::Human => Self::Automated,
            Self::Automated => Self::Human,
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("Human"),
            Self::Automated => f.write_str("AI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    pub controller: Controller,
    pub pieces_remaining: u8,
}

impl PlayerInfo {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            pieces_remaining: STARTING_PIECES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WinReason {
    /// The opponent lost its last piece.
    Elimination,
    /// A piece reached the opponent's home rank.
    Breakthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Terminal {
    pub winner: Side,
    pub reason: WinReason,
}

/// Result of a move request.
///
/// Contract:
/// - `applied == false`: nothing changed; `capture` is `None`, and `terminal`
///   carries the finished game's outcome if the request was refused because
///   the game is over.
/// - `applied == true`: `capture` names the side that lost a piece, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MoveOutcome {
    pub applied: bool,
    pub mv: Option<Move>,
    pub capture: Option<Side>,
    pub terminal: Option<Terminal>,
}

impl MoveOutcome {
    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn finished(terminal: Terminal) -> Self {
        Self {
            terminal: Some(terminal),
            ..Self::default()
        }
    }
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 cells, row-major: 0=empty, 1=black, 2=green.
    pub board: Vec<u8>,
    pub active_side: Side,
    pub black: PlayerInfo,
    pub green: PlayerInfo,
    pub selection: Option<Position>,
    pub terminal: Option<Terminal>,
}
