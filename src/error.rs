use thiserror::Error;

/// A coordinate outside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square ({row}, {col}) is off the board")]
pub struct BoundsError {
    pub row: i32,
    pub col: i32,
}
