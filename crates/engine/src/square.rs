//! Board coordinates.

use crate::constants::{BOARD_SIZE, NUM_SQUARES};
use crate::error::{ChessError, ChessResult};
use std::fmt;

/// A (row, column) coordinate. Row 0 is Black's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from in-range coordinates.
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Square { row, col }
    }

    /// Creates a square from untrusted coordinates.
    pub fn try_new(row: usize, col: usize) -> ChessResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square::new(row as u8, col as u8))
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    pub const fn from_index(index: usize) -> Self {
        Square::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square shifted by the given deltas, or `None` off the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
