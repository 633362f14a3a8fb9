//! Error types for the chess engine.

use crate::square::Square;
use thiserror::Error;

/// Errors surfaced by the command layer of the engine.
///
/// Rule checks themselves are boolean gates (`Game::is_valid_move`); these
/// errors only appear where a caller hands in raw coordinates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not among the piece's legal moves
    #[error("Invalid move: from square {from} to square {to}")]
    InvalidMove { from: Square, to: Square },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Coordinates outside the 8x8 board
    #[error("Square ({row}, {col}) is off the board (must be 0-7)")]
    OutOfBounds { row: usize, col: usize },
}

/// Result type alias for chess engine operations
pub type ChessResult<T> = Result<T, ChessError>;
