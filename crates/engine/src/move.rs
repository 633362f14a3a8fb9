//! Defines the representation of a move in the engine.

use crate::constants::Piece;
use crate::square::Square;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a single move.
///
/// The destination carries a snapshot of the piece it would capture, taken at
/// generation time. For en passant that is the passed pawn even though the
/// destination square itself is empty. Equality only looks at the two squares.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl Move {
    /// Placeholder used to fill fixed-size move buffers.
    pub const NULL: Move = Move {
        from: Square::new(0, 0),
        to: Square::new(0, 0),
        captured: None,
    };

    /// Creates a new move.
    pub fn new(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move { from, to, captured }
    }

    /// Gets the source square.
    pub fn from(&self) -> Square {
        self.from
    }

    /// Gets the destination square.
    pub fn to(&self) -> Square {
        self.to
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Checks if the move is a capture.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn col_delta(&self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    pub fn row_delta(&self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
