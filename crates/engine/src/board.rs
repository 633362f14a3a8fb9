//! The core board representation for the chess engine.

use crate::constants::{Color, NUM_SQUARES, Piece, PieceKind};
use crate::square::Square;
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each square owns at most one piece.
///
/// Pure storage and occupancy queries; no rule is enforced at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    /// The standard chess starting arrangement.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.set_piece(
                    Square::new(color.back_rank(), col as u8),
                    Piece::new(*kind, color),
                );
                board.set_piece(
                    Square::new(color.pawn_rank(), col as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    pub fn has_piece(&self, sq: Square) -> bool {
        !self.is_empty(sq)
    }

    pub fn has_rival_piece(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color != color)
    }

    pub fn has_team_piece(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color == color)
    }

    pub fn is_empty_or_rival(&self, sq: Square, color: Color) -> bool {
        !self.has_team_piece(sq, color)
    }

    /// Iterates over the pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// The pawn currently allowed to be captured en passant, if any.
    pub fn en_passant_holder(&self) -> Option<Square> {
        Square::all().find(|&sq| matches!(self.piece_at(sq), Some(p) if p.en_passant))
    }

    pub fn clear_en_passant_flags(&mut self) {
        for piece in self.squares.iter_mut().flatten() {
            piece.en_passant = false;
        }
    }

    /// Flags the pawn on `sq`. Leaves other pawns untouched.
    pub fn set_en_passant_flag(&mut self, sq: Square) {
        if let Some(piece) = self.squares[sq.index()].as_mut() {
            if piece.kind == PieceKind::Pawn {
                piece.en_passant = true;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for r in 0..8u8 {
            write!(f, "{} | ", r)?;
            for c in 0..8u8 {
                match self.piece_at(Square::new(r, c)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    0 1 2 3 4 5 6 7")
    }
}
