//! Move generation logic, including pre-computed attack tables.
//!
//! Everything in here is pseudo-legal: it follows the movement pattern of each
//! piece and the occupancy of the board, but never looks at whether the mover's
//! own king ends up attacked. The self-check filter lives in [`crate::game`].

use crate::board::Board;
use crate::constants::{Color, NUM_SQUARES, Piece, PieceKind};
use crate::movelist::PieceMoves;
use crate::r#move::Move;
use crate::square::Square;
use once_cell::sync::Lazy;

pub type Bitboard = u64;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// A struct to hold all the pre-computed attack tables.
/// The tables are initialized once and then accessed globally.
pub struct AttackTables {
    pub knight: [Bitboard; NUM_SQUARES],
    pub king: [Bitboard; NUM_SQUARES],
    /// Squares a pawn of the given color attacks from each square. [color][square]
    pub pawn: [[Bitboard; NUM_SQUARES]; 2],
}

impl AttackTables {
    fn new() -> Self {
        let mut tables = AttackTables {
            knight: [0; NUM_SQUARES],
            king: [0; NUM_SQUARES],
            pawn: [[0; NUM_SQUARES]; 2],
        };

        for sq in Square::all() {
            let idx = sq.index();
            for (dr, dc) in KNIGHT_OFFSETS {
                if let Some(to) = sq.offset(dr, dc) {
                    tables.knight[idx] |= square_mask(to);
                }
            }
            for (dr, dc) in KING_OFFSETS {
                if let Some(to) = sq.offset(dr, dc) {
                    tables.king[idx] |= square_mask(to);
                }
            }
            for color in [Color::White, Color::Black] {
                for dc in [-1, 1] {
                    if let Some(to) = sq.offset(color.forward(), dc) {
                        tables.pawn[color.index()][idx] |= square_mask(to);
                    }
                }
            }
        }

        tables
    }
}

// The global static instance of the attack tables, initialized lazily and only once.
pub static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::new);

#[inline]
pub fn square_mask(sq: Square) -> Bitboard {
    1 << sq.index()
}

/// Iterates the squares set in a bitboard, lowest index first.
pub fn squares_of(mut bb: Bitboard) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if bb == 0 {
            return None;
        }
        let idx = bb.trailing_zeros() as usize;
        bb &= bb - 1;
        Some(Square::from_index(idx))
    })
}

/// A castling option: the king's two-column shift and the paired rook move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castling {
    pub king_move: Move,
    pub rook_move: Move,
    /// The square the king crosses on its way.
    pub transit: Square,
}

/// Queen side first, then king side.
pub type CastlingOptions = [Option<Castling>; 2];

/// Appends the pseudo-legal moves of the piece on `from`, castling excluded.
pub fn generate_pseudo_moves(board: &Board, from: Square, moves: &mut PieceMoves) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, moves),
        PieceKind::Knight => {
            leaper_moves(board, from, piece, ATTACK_TABLES.knight[from.index()], moves)
        }
        PieceKind::Bishop => slider_moves(board, from, piece, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => slider_moves(board, from, piece, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => slider_moves(board, from, piece, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => {
            leaper_moves(board, from, piece, ATTACK_TABLES.king[from.index()], moves)
        }
    }
}

fn pawn_moves(board: &Board, from: Square, pawn: Piece, moves: &mut PieceMoves) {
    let dir = pawn.color.forward();

    // Forward steps, blocked by any piece.
    let steps = if pawn.moved { 1 } else { 2 };
    let mut target = from;
    for _ in 0..steps {
        match target.offset(dir, 0) {
            Some(next) if board.is_empty(next) => {
                moves.add(Move::new(from, next, None));
                target = next;
            }
            _ => break,
        }
    }

    // Diagonal captures.
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.has_rival_piece(to, pawn.color) {
                moves.add(Move::new(from, to, board.piece_at(to)));
            }
        }
    }

    // En passant.
    if from.row() != pawn.color.en_passant_rank() {
        return;
    }
    for dc in [-1, 1] {
        let (Some(beside), Some(to)) = (from.offset(0, dc), from.offset(dir, dc)) else {
            continue;
        };
        match board.piece_at(beside) {
            Some(p) if p.is(PieceKind::Pawn, pawn.color.opponent()) && p.en_passant => {
                if board.is_empty(to) {
                    moves.add(Move::new(from, to, Some(p)));
                }
            }
            _ => {}
        }
    }
}

fn leaper_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    targets: Bitboard,
    moves: &mut PieceMoves,
) {
    for to in squares_of(targets) {
        if board.is_empty_or_rival(to, piece.color) {
            moves.add(Move::new(from, to, board.piece_at(to)));
        }
    }
}

fn slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut PieceMoves,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.piece_at(to) {
                None => moves.add(Move::new(from, to, None)),
                Some(target) if target.color != piece.color => {
                    moves.add(Move::new(from, to, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            current = to;
        }
    }
}

/// Castling options available by board state alone: an unmoved king on its
/// home square, an unmoved rook of the same color in the corner and nothing
/// in between. Attacked squares are not considered here.
pub fn castling_candidates(board: &Board, from: Square) -> CastlingOptions {
    let mut options = [None, None];
    let Some(king) = board.piece_at(from) else {
        return options;
    };
    let home = Square::new(king.color.back_rank(), 4);
    if king.kind != PieceKind::King || king.moved || from != home {
        return options;
    }

    let row = from.row();
    // (rook column, king destination column, rook destination column)
    let sides: [(u8, u8, u8); 2] = [(0, 2, 3), (7, 6, 5)];
    for (slot, &(rook_col, king_to, rook_to)) in sides.iter().enumerate() {
        let rook_sq = Square::new(row, rook_col);
        let rook_ready = matches!(
            board.piece_at(rook_sq),
            Some(p) if p.is(PieceKind::Rook, king.color) && !p.moved
        );
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
        if (lo..hi).any(|c| board.has_piece(Square::new(row, c))) {
            continue;
        }

        options[slot] = Some(Castling {
            king_move: Move::new(from, Square::new(row, king_to), None),
            rook_move: Move::new(rook_sq, Square::new(row, rook_to), None),
            transit: Square::new(row, rook_to),
        });
    }
    options
}

/// Rook relocation for a king that shifts two columns onto `king_to`.
pub fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let row = king_to.row();
    if king_to.col() < 4 {
        (Square::new(row, 0), Square::new(row, 3))
    } else {
        (Square::new(row, 7), Square::new(row, 5))
    }
}

/// Checks if a given square is attacked by the specified color.
///
/// This is the reverse of pseudo-legal generation: a square is attacked iff
/// some piece of `attacker` has a pseudo-legal move landing on it when it is
/// occupied by a rival. Pawn pushes, en passant and castling only ever land
/// on empty squares, so only the capturing patterns need to be scanned.
pub fn is_square_attacked_by(board: &Board, sq: Square, attacker: Color) -> bool {
    let defender = attacker.opponent();
    let is_attacker = |at: Square, kinds: &[PieceKind]| {
        matches!(board.piece_at(at), Some(p) if p.color == attacker && kinds.contains(&p.kind))
    };

    // Attacked by Pawns (using reverse lookup)
    if squares_of(ATTACK_TABLES.pawn[defender.index()][sq.index()])
        .any(|at| is_attacker(at, &[PieceKind::Pawn]))
    {
        return true;
    }

    // Attacked by Knight
    if squares_of(ATTACK_TABLES.knight[sq.index()])
        .any(|at| is_attacker(at, &[PieceKind::Knight]))
    {
        return true;
    }

    // Attacked by King
    if squares_of(ATTACK_TABLES.king[sq.index()]).any(|at| is_attacker(at, &[PieceKind::King])) {
        return true;
    }

    // Sliders: the first piece along each ray decides.
    let rays: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&ROOK_DIRECTIONS[..], [PieceKind::Rook, PieceKind::Queen]),
        (&BISHOP_DIRECTIONS[..], [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in rays {
        for &(dr, dc) in directions {
            let mut current = sq;
            while let Some(next) = current.offset(dr, dc) {
                if board.has_piece(next) {
                    if is_attacker(next, &kinds) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
    }

    false
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_square_attacked_by(board, king_sq, color.opponent()),
        None => false,
    }
}
