//! Evaluates a board position and returns a score.
//!
//! The score is one-sided: only the evaluating color's own material counts.
//! Taking an enemy piece therefore does not raise the score by itself; the
//! search is driven by not losing material rather than by winning it.

use crate::board::Board;
use crate::config::Config;
use crate::constants::Color;

/// Sum of the material values of `color`'s pieces on the board.
pub fn evaluate(board: &Board, color: Color, config: &Config) -> i32 {
    board
        .pieces(color)
        .map(|(_, piece)| config.material_value(piece.kind))
        .sum()
}
