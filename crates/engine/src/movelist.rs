//! A move list implementation that avoids heap allocations.

use crate::r#move::Move;
use std::ops::Index;

pub const MAX_MOVES: usize = 256;

/// Moves a single piece can have: a queen tops out at 27, a rook at 14 plus
/// its castling partner move.
pub const MAX_PIECE_MOVES: usize = 32;

pub type PieceMoves = MoveList<MAX_PIECE_MOVES>;

#[derive(Debug, Clone)]
pub struct MoveList<const N: usize = MAX_MOVES> {
    moves: [Move; N],
    count: usize,
}

impl<const N: usize> MoveList<N> {
    pub fn new() -> Self {
        Self {
            moves: [Move::NULL; N],
            count: 0,
        }
    }

    /// Appends `mv`. A full list keeps its contents and drops `mv`.
    pub fn add(&mut self, mv: Move) {
        debug_assert!(self.count < N, "move list overflow at {N} moves");
        if self.count < N {
            self.moves[self.count] = mv;
            self.count += 1;
        }
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves[0..self.count]
    }
}

impl<const N: usize> Default for MoveList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for MoveList<N> {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}
