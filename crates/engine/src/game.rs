//! Game state: the position, the turn indicator, the last move and the move
//! lists produced by generation.
//!
//! Legality is checked by simulating a candidate on the live position with
//! [`Game::make_move`] and rolling it back with [`Game::unmake_move`], so
//! probing never copies the board.

use crate::board::Board;
use crate::constants::{Color, NUM_SQUARES, Piece, PieceKind};
use crate::error::{ChessError, ChessResult};
use crate::move_gen::{self, Castling};
use crate::movelist::{MoveList, PieceMoves};
use crate::r#move::Move;
use crate::square::Square;
use tracing::{trace, warn};

/// How much bookkeeping a move application performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Legality probe: no castling rook relocation, move lists untouched.
    Testing,
    /// Plain application, as done by [`Game::apply_move`].
    Apply,
    /// Application plus en-passant eligibility upkeep, as done by
    /// [`Game::play_move`].
    Play,
}

/// Terminal state for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Everything needed to roll a move back.
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    mode: MoveMode,
    moved: Option<Piece>,
    captured: Option<(Square, Piece)>,
    castled_rook: Option<(Square, Square, Piece)>,
    en_passant_holder: Option<Square>,
    last_move: Option<Move>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    last_move: Option<Move>,
    move_lists: [PieceMoves; NUM_SQUARES],
}

impl Game {
    /// A new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            last_move: None,
            move_lists: std::array::from_fn(|_| PieceMoves::new()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Hands the turn to the other side. Never called by the core itself.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The move list of the piece on `sq`, as left by the last generation.
    pub fn moves(&self, sq: Square) -> &[Move] {
        self.move_lists[sq.index()].as_slice()
    }

    pub fn clear_moves(&mut self, sq: Square) {
        self.move_lists[sq.index()].clear();
    }

    /// Runs `f` on this game and puts every move list back afterwards.
    ///
    /// Lookahead regenerates lists for hypothetical positions; this keeps
    /// those out of what the caller generated for the live one.
    pub fn preserving_move_lists<T>(&mut self, f: impl FnOnce(&mut Game) -> T) -> T {
        let saved = self.move_lists.clone();
        let result = f(self);
        self.move_lists = saved;
        result
    }

    /// Appends the moves of the piece on `from` to its move list.
    ///
    /// With `filter_self_check` every candidate that would leave the mover's
    /// king capturable is dropped. Callers clear the list beforehand.
    pub fn generate_moves(&mut self, from: Square, filter_self_check: bool) {
        let Some(piece) = self.board.piece_at(from) else {
            return;
        };

        let mut candidates = PieceMoves::new();
        move_gen::generate_pseudo_moves(&self.board, from, &mut candidates);

        let mut accepted = PieceMoves::new();
        for &mv in candidates.as_slice() {
            if !filter_self_check || !self.is_self_check_after(mv) {
                accepted.add(mv);
            }
        }
        let list = &mut self.move_lists[from.index()];
        for &mv in accepted.as_slice() {
            list.add(mv);
        }

        if piece.kind == PieceKind::King {
            self.generate_castling(from, piece.color, filter_self_check);
        }
    }

    fn generate_castling(&mut self, from: Square, color: Color, filter_self_check: bool) {
        let options = move_gen::castling_candidates(&self.board, from);
        for castling in options.into_iter().flatten() {
            if filter_self_check && !self.castling_is_safe(color, &castling) {
                continue;
            }
            self.move_lists[from.index()].add(castling.king_move);
            let rook_list = &mut self.move_lists[castling.rook_move.from().index()];
            if !rook_list.contains(&castling.rook_move) {
                rook_list.add(castling.rook_move);
            }
        }
    }

    /// The king may not castle out of, through or into check.
    fn castling_is_safe(&mut self, color: Color, castling: &Castling) -> bool {
        let step = Move::new(castling.king_move.from(), castling.transit, None);
        !self.is_in_check(color)
            && !self.is_self_check_after(step)
            && !self.is_self_check_after(castling.king_move)
            && !self.is_self_check_after(castling.rook_move)
    }

    /// All legal moves of `color`, in board order.
    ///
    /// Regenerates the move list of every piece of that color.
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut all: MoveList = MoveList::new();
        for sq in Square::all() {
            if !self.board.has_team_piece(sq, color) {
                continue;
            }
            self.clear_moves(sq);
            self.generate_moves(sq, true);
            for &mv in self.moves(sq) {
                all.add(mv);
            }
        }
        all
    }

    /// Whether applying `mv` would leave the mover's own king capturable.
    pub fn is_self_check_after(&mut self, mv: Move) -> bool {
        let Some(piece) = self.board.piece_at(mv.from()) else {
            return false;
        };
        let undo = self.make_move(mv, MoveMode::Testing);
        let in_check = move_gen::is_king_in_check(&self.board, piece.color);
        self.unmake_move(mv, undo);
        in_check
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        move_gen::is_king_in_check(&self.board, color)
    }

    pub fn has_no_legal_moves(&mut self, color: Color) -> bool {
        self.legal_moves(color).is_empty()
    }

    /// No legal move and the king is attacked.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    /// No legal move while the king is safe.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.has_no_legal_moves(color)
    }

    /// `None` while `color` still has a move to play.
    pub fn outcome(&mut self, color: Color) -> Option<Outcome> {
        if !self.has_no_legal_moves(color) {
            return None;
        }
        if self.is_in_check(color) {
            Some(Outcome::Checkmate { winner: color.opponent() })
        } else {
            Some(Outcome::Stalemate)
        }
    }

    /// True iff the destination is empty or rival and the move was produced
    /// by the last generation for the moving piece.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        let Some(piece) = self.board.piece_at(mv.from()) else {
            return false;
        };
        if self.board.has_team_piece(mv.to(), piece.color) {
            return false;
        }
        self.move_lists[mv.from().index()].contains(&mv)
    }

    /// Moves the piece without any legality check.
    pub fn apply_move(&mut self, mv: Move) {
        self.make_move(mv, MoveMode::Apply);
    }

    /// Applies `mv` and keeps the en-passant flag in step with it: a pawn
    /// double step flags that pawn, anything else clears the flag.
    pub fn play_move(&mut self, mv: Move) {
        self.make_move(mv, MoveMode::Play);
    }

    /// Validates a move given by coordinates and plays it.
    pub fn try_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        if self.board.is_empty(from) {
            return Err(ChessError::NoPieceAtSquare { square: from });
        }
        self.clear_moves(from);
        self.generate_moves(from, true);

        let mv = self
            .moves(from)
            .iter()
            .find(|m| m.to() == to)
            .copied()
            .filter(|&m| self.is_valid_move(m))
            .ok_or(ChessError::InvalidMove { from, to })?;

        self.play_move(mv);
        Ok(mv)
    }

    /// Flags the pawn on `sq` as capturable en passant and clears every other
    /// pawn's flag. A no-op for anything but a pawn.
    pub fn set_en_passant_eligibility(&mut self, sq: Square) {
        if !matches!(self.board.piece_at(sq), Some(p) if p.kind == PieceKind::Pawn) {
            return;
        }
        self.board.clear_en_passant_flags();
        self.board.set_en_passant_flag(sq);
    }

    pub fn clear_en_passant_eligibility(&mut self) {
        self.board.clear_en_passant_flags();
    }

    /// Applies `mv` and returns what is needed to take it back.
    ///
    /// Side effects in order: en passant removal, promotion to queen, rook
    /// relocation for castling (not when testing), moved flag, clearing the
    /// lists of every square the move touched (not when testing), last move.
    pub fn make_move(&mut self, mv: Move, mode: MoveMode) -> Undo {
        let from = mv.from();
        let to = mv.to();
        let en_passant_holder = match mode {
            MoveMode::Play => self.board.en_passant_holder(),
            _ => None,
        };

        let Some(moved) = self.board.remove_piece(from) else {
            warn!(%mv, "move from an empty square ignored");
            return Undo {
                mode,
                moved: None,
                captured: None,
                castled_rook: None,
                en_passant_holder,
                last_move: self.last_move,
            };
        };
        let mut piece = moved;

        let mut captured = self.board.remove_piece(to).map(|p| (to, p));
        if piece.kind == PieceKind::Pawn && captured.is_none() && mv.col_delta() != 0 {
            let passed = Square::new(from.row(), to.col());
            captured = self.board.remove_piece(passed).map(|p| (passed, p));
        }

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_rank() {
            piece.kind = PieceKind::Queen;
            piece.en_passant = false;
        }

        let mut castled_rook = None;
        if piece.kind == PieceKind::King && mv.col_delta().abs() == 2 && mode != MoveMode::Testing {
            let (rook_from, rook_to) = move_gen::castling_rook_squares(to);
            if let Some(rook) = self.board.remove_piece(rook_from) {
                self.board.set_piece(rook_to, Piece { moved: true, ..rook });
                self.move_lists[rook_from.index()].clear();
                self.move_lists[rook_to.index()].clear();
                castled_rook = Some((rook_from, rook_to, rook));
            }
        }

        piece.moved = true;
        self.board.set_piece(to, piece);
        if mode != MoveMode::Testing {
            // Lists belong to squares: whatever stood on `to` or was taken
            // en passant no longer owns its moves.
            self.move_lists[from.index()].clear();
            self.move_lists[to.index()].clear();
            if let Some((sq, _)) = captured {
                self.move_lists[sq.index()].clear();
            }
        }
        let last_move = self.last_move.replace(mv);

        if mode == MoveMode::Play {
            if moved.kind == PieceKind::Pawn && mv.row_delta().abs() == 2 {
                self.set_en_passant_eligibility(to);
            } else {
                self.clear_en_passant_eligibility();
            }
        }

        if mode != MoveMode::Testing {
            trace!(%mv, ?mode, "applied");
        }

        Undo {
            mode,
            moved: Some(moved),
            captured,
            castled_rook,
            en_passant_holder,
            last_move,
        }
    }

    /// Takes back a move made with [`Game::make_move`].
    ///
    /// Board, flags and last move are restored exactly; cleared move lists
    /// are not.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        if let Some(moved) = undo.moved {
            self.board.remove_piece(mv.to());
            self.board.set_piece(mv.from(), moved);
            if let Some((sq, piece)) = undo.captured {
                self.board.set_piece(sq, piece);
            }
            if let Some((rook_from, rook_to, rook)) = undo.castled_rook {
                self.board.remove_piece(rook_to);
                self.board.set_piece(rook_from, rook);
            }
            if undo.mode == MoveMode::Play {
                self.board.clear_en_passant_flags();
                if let Some(sq) = undo.en_passant_holder {
                    self.board.set_en_passant_flag(sq);
                }
            }
        }
        self.last_move = undo.last_move;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color) {
        board.set_piece(Square::new(row, col), Piece::moved(kind, color));
    }

    fn generated(game: &mut Game, sq: Square) -> Vec<Move> {
        game.clear_moves(sq);
        game.generate_moves(sq, true);
        game.moves(sq).to_vec()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let mut game = Game::new();
        assert_eq!(game.legal_moves(Color::White).len(), 20);
        assert_eq!(game.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_is_valid_move_requires_generation() {
        let mut game = Game::new();
        let from = Square::new(6, 4);
        let mv = Move::new(from, Square::new(4, 4), None);
        assert!(!game.is_valid_move(mv));
        game.generate_moves(from, true);
        assert!(game.is_valid_move(mv));
        // Own piece on the destination.
        assert!(!game.is_valid_move(Move::new(from, Square::new(7, 4), None)));
    }

    #[test]
    fn test_apply_clears_list_and_records_last_move() {
        let mut game = Game::new();
        let from = Square::new(7, 6);
        game.generate_moves(from, true);
        let mv = Move::new(from, Square::new(5, 5), None);
        assert!(game.is_valid_move(mv));

        game.apply_move(mv);
        assert!(game.moves(from).is_empty());
        assert_eq!(game.last_move(), Some(mv));
        assert!(game.board().piece_at(Square::new(5, 5)).is_some_and(|p| p.moved));
        // The core never touches the turn.
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_capture_drops_the_victims_move_list() {
        let mut board = Board::empty();
        place(&mut board, 7, 0, PieceKind::King, Color::White);
        place(&mut board, 0, 7, PieceKind::King, Color::Black);
        place(&mut board, 3, 3, PieceKind::Queen, Color::Black);
        place(&mut board, 5, 4, PieceKind::Knight, Color::White);
        let mut game = Game::from_board(board, Color::White);

        let queen = Square::new(3, 3);
        let queen_move = Move::new(queen, Square::new(3, 7), None);
        assert_eq!(game.outcome(Color::Black), None);
        assert!(game.moves(queen).contains(&queen_move));

        let knight = Square::new(5, 4);
        game.generate_moves(knight, true);
        let capture = Move::new(knight, queen, None);
        assert!(game.is_valid_move(capture));
        game.apply_move(capture);

        assert!(game.moves(queen).is_empty());
        assert!(!game.is_valid_move(queen_move));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 6, 4, PieceKind::Knight, Color::White);
        place(&mut board, 0, 4, PieceKind::Rook, Color::Black);
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        let mut game = Game::from_board(board, Color::White);

        assert!(generated(&mut game, Square::new(6, 4)).is_empty());

        game.clear_moves(Square::new(6, 4));
        game.generate_moves(Square::new(6, 4), false);
        assert_eq!(game.moves(Square::new(6, 4)).len(), 6);
    }

    #[test]
    fn test_en_passant_capture_removes_passed_pawn() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 0, 4, PieceKind::King, Color::Black);
        place(&mut board, 3, 4, PieceKind::Pawn, Color::White);
        board.set_piece(Square::new(1, 3), Piece::new(PieceKind::Pawn, Color::Black));
        let mut game = Game::from_board(board, Color::Black);

        let double_step = Move::new(Square::new(1, 3), Square::new(3, 3), None);
        game.apply_move(double_step);
        game.set_en_passant_eligibility(Square::new(3, 3));

        let white_pawn = Square::new(3, 4);
        let moves = generated(&mut game, white_pawn);
        let capture = Move::new(white_pawn, Square::new(2, 3), None);
        assert!(moves.contains(&capture));
        let snapshot = moves.iter().find(|m| **m == capture).and_then(|m| m.captured());
        assert!(snapshot.is_some_and(|p| p.kind == PieceKind::Pawn && p.color == Color::Black));

        assert!(game.is_valid_move(capture));
        game.apply_move(capture);
        assert!(game.board().is_empty(Square::new(3, 3)));
        assert!(
            game.board()
                .piece_at(Square::new(2, 3))
                .is_some_and(|p| p.is(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn test_en_passant_needs_flag() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 0, 4, PieceKind::King, Color::Black);
        place(&mut board, 3, 4, PieceKind::Pawn, Color::White);
        place(&mut board, 3, 5, PieceKind::Pawn, Color::Black);
        let mut game = Game::from_board(board, Color::White);

        let moves = generated(&mut game, Square::new(3, 4));
        assert_eq!(moves, vec![Move::new(Square::new(3, 4), Square::new(2, 4), None)]);
    }

    #[test]
    fn test_play_move_tracks_double_step() {
        let mut game = Game::new();
        game.play_move(Move::new(Square::new(6, 4), Square::new(4, 4), None));
        assert_eq!(game.board().en_passant_holder(), Some(Square::new(4, 4)));
        game.play_move(Move::new(Square::new(0, 6), Square::new(2, 5), None));
        assert_eq!(game.board().en_passant_holder(), None);
    }

    #[test]
    fn test_set_en_passant_eligibility_ignores_non_pawns() {
        let mut game = Game::new();
        game.set_en_passant_eligibility(Square::new(6, 0));
        game.set_en_passant_eligibility(Square::new(7, 0));
        assert_eq!(game.board().en_passant_holder(), Some(Square::new(6, 0)));
        game.set_en_passant_eligibility(Square::new(1, 7));
        assert_eq!(game.board().en_passant_holder(), Some(Square::new(1, 7)));
    }

    #[test]
    fn test_promotion_to_queen() {
        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 0, 7, PieceKind::King, Color::Black);
        place(&mut board, 1, 0, PieceKind::Pawn, Color::White);
        place(&mut board, 0, 1, PieceKind::Knight, Color::Black);
        let mut game = Game::from_board(board, Color::White);

        let pawn = Square::new(1, 0);
        let moves = generated(&mut game, pawn);
        assert_eq!(moves.len(), 2);
        game.apply_move(Move::new(pawn, Square::new(0, 1), None));
        assert!(
            game.board()
                .piece_at(Square::new(0, 1))
                .is_some_and(|p| p.is(PieceKind::Queen, Color::White))
        );
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Piece::new(PieceKind::King, Color::White));
        board.set_piece(Square::new(7, 0), Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(Square::new(7, 7), Piece::new(PieceKind::Rook, Color::White));
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        board
    }

    #[test]
    fn test_castling_pairs_and_rook_relocation() {
        let mut game = Game::from_board(castling_board(), Color::White);
        let king = Square::new(7, 4);
        let moves = generated(&mut game, king);
        let king_side = Move::new(king, Square::new(7, 6), None);
        let queen_side = Move::new(king, Square::new(7, 2), None);
        assert!(moves.contains(&king_side));
        assert!(moves.contains(&queen_side));
        let king_rook = Move::new(Square::new(7, 7), Square::new(7, 5), None);
        let queen_rook = Move::new(Square::new(7, 0), Square::new(7, 3), None);
        assert!(game.moves(Square::new(7, 7)).contains(&king_rook));
        assert!(game.moves(Square::new(7, 0)).contains(&queen_rook));

        game.apply_move(king_side);
        let board = game.board();
        assert!(board.piece_at(Square::new(7, 6)).is_some_and(|p| p.kind == PieceKind::King));
        assert!(
            board
                .piece_at(Square::new(7, 5))
                .is_some_and(|p| p.is(PieceKind::Rook, Color::White) && p.moved)
        );
        assert!(game.board().is_empty(Square::new(7, 7)));
    }

    #[test]
    fn test_castling_through_or_into_attack_is_excluded() {
        let king = Square::new(7, 4);

        // Rook eyes the transit square f1.
        let mut board = castling_board();
        place(&mut board, 0, 5, PieceKind::Rook, Color::Black);
        let mut game = Game::from_board(board, Color::White);
        let moves = generated(&mut game, king);
        assert!(!moves.contains(&Move::new(king, Square::new(7, 6), None)));
        assert!(moves.contains(&Move::new(king, Square::new(7, 2), None)));

        // Rook eyes the destination c1.
        let mut board = castling_board();
        place(&mut board, 0, 2, PieceKind::Rook, Color::Black);
        let mut game = Game::from_board(board, Color::White);
        let moves = generated(&mut game, king);
        assert!(moves.contains(&Move::new(king, Square::new(7, 6), None)));
        assert!(!moves.contains(&Move::new(king, Square::new(7, 2), None)));

        // King in check.
        let mut board = castling_board();
        place(&mut board, 3, 4, PieceKind::Rook, Color::Black);
        let mut game = Game::from_board(board, Color::White);
        let moves = generated(&mut game, king);
        assert!(!moves.iter().any(|m| m.col_delta().abs() == 2));
    }

    #[test]
    fn test_castling_needs_unmoved_rook() {
        let mut board = castling_board();
        board.set_piece(Square::new(7, 7), Piece::moved(PieceKind::Rook, Color::White));
        let mut game = Game::from_board(board, Color::White);
        let moves = generated(&mut game, Square::new(7, 4));
        assert!(!moves.contains(&Move::new(Square::new(7, 4), Square::new(7, 6), None)));
        assert!(moves.contains(&Move::new(Square::new(7, 4), Square::new(7, 2), None)));
    }

    #[test]
    fn test_checkmate_and_escape() {
        // Rook mates along the back rank, king covers the escape squares.
        let mut board = Board::empty();
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        place(&mut board, 2, 1, PieceKind::King, Color::White);
        place(&mut board, 0, 7, PieceKind::Rook, Color::White);
        let mut game = Game::from_board(board, Color::Black);
        assert!(game.is_in_check(Color::Black));
        assert!(game.is_checkmate(Color::Black));
        assert_eq!(game.outcome(Color::Black), Some(Outcome::Checkmate { winner: Color::White }));

        // Protected rook right next to the king, but a7 is free.
        let mut board = Board::empty();
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        place(&mut board, 1, 2, PieceKind::King, Color::White);
        place(&mut board, 0, 1, PieceKind::Rook, Color::White);
        let mut game = Game::from_board(board, Color::Black);
        assert!(game.is_in_check(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(
            game.legal_moves(Color::Black).as_slice(),
            &[Move::new(Square::new(0, 0), Square::new(1, 0), None)]
        );
    }

    #[test]
    fn test_stalemate_is_not_checkmate() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, PieceKind::King, Color::Black);
        place(&mut board, 2, 1, PieceKind::Queen, Color::White);
        place(&mut board, 7, 7, PieceKind::King, Color::White);
        let mut game = Game::from_board(board, Color::Black);
        assert!(game.has_no_legal_moves(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert!(game.is_stalemate(Color::Black));
        assert_eq!(game.outcome(Color::Black), Some(Outcome::Stalemate));
    }

    #[test]
    fn test_try_move_errors() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move(Square::new(4, 4), Square::new(3, 4)),
            Err(ChessError::NoPieceAtSquare { square: Square::new(4, 4) })
        );
        assert_eq!(
            game.try_move(Square::new(6, 4), Square::new(3, 4)),
            Err(ChessError::InvalidMove { from: Square::new(6, 4), to: Square::new(3, 4) })
        );
        let mv = game.try_move(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(mv, Ok(Move::new(Square::new(6, 4), Square::new(4, 4), None)));
        assert_eq!(game.board().en_passant_holder(), Some(Square::new(4, 4)));
    }

    #[test]
    fn test_make_unmake_restores_castling_and_en_passant() {
        let mut game = Game::from_board(castling_board(), Color::White);
        let before = game.board().clone();
        let castle = Move::new(Square::new(7, 4), Square::new(7, 6), None);
        let undo = game.make_move(castle, MoveMode::Play);
        assert!(game.board().piece_at(Square::new(7, 5)).is_some());
        game.unmake_move(castle, undo);
        assert_eq!(game.board(), &before);
        assert_eq!(game.last_move(), None);

        let mut board = Board::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 0, 4, PieceKind::King, Color::Black);
        place(&mut board, 4, 2, PieceKind::Pawn, Color::Black);
        board.set_piece(Square::new(6, 3), Piece::new(PieceKind::Pawn, Color::White));
        let mut game = Game::from_board(board, Color::White);
        game.play_move(Move::new(Square::new(6, 3), Square::new(4, 3), None));
        let before = game.board().clone();

        let capture = Move::new(Square::new(4, 2), Square::new(5, 3), None);
        let undo = game.make_move(capture, MoveMode::Play);
        assert!(game.board().is_empty(Square::new(4, 3)));
        assert_eq!(game.board().en_passant_holder(), None);
        game.unmake_move(capture, undo);
        assert_eq!(game.board(), &before);
        assert_eq!(game.board().en_passant_holder(), Some(Square::new(4, 3)));
    }
}
