//! Configuration for the chess engine.

use crate::constants::PieceKind;

pub struct Config {
    // Evaluation constants
    pub pawn_value: i32,
    pub knight_value: i32,
    pub bishop_value: i32,
    pub rook_value: i32,
    pub queen_value: i32,
    pub king_value: i32,

    // Search constants
    pub default_search_depth: u32,
}

impl Config {
    pub fn material_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn_value,
            PieceKind::Knight => self.knight_value,
            PieceKind::Bishop => self.bishop_value,
            PieceKind::Rook => self.rook_value,
            PieceKind::Queen => self.queen_value,
            PieceKind::King => self.king_value,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pawn_value: PieceKind::Pawn.value(),
            knight_value: PieceKind::Knight.value(),
            bishop_value: PieceKind::Bishop.value(),
            rook_value: PieceKind::Rook.value(),
            queen_value: PieceKind::Queen.value(),
            king_value: PieceKind::King.value(),
            default_search_depth: 3,
        }
    }
}
