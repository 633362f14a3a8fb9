//! The minimax search engine.

use crate::config::Config;
use crate::constants::{Color, INFINITY};
use crate::evaluate;
use crate::game::{Game, MoveMode};
use crate::r#move::Move;
use tracing::{debug, info};

/// Fixed-depth minimax with alpha-beta pruning.
///
/// The searching color is the maximizer; its opponent minimizes the same
/// one-sided material score. All simulation happens on the caller's `Game`
/// through make/unmake, which leaves the position exactly as it was found.
pub struct Engine {
    pub nodes_searched: u64,
    pub config: Config,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            nodes_searched: 0,
            config,
        }
    }

    /// Picks the best move for `color`, searching `depth` plies.
    ///
    /// Every root move is scored at `depth - 1` with the opponent to reply.
    /// The strictly highest score wins, so ties go to the first move in
    /// generation order. `None` if `color` has no legal move.
    ///
    /// The move lists of `game` are the same afterwards as before the call.
    pub fn choose_smart_move(
        &mut self,
        game: &mut Game,
        color: Color,
        depth: u32,
    ) -> Option<(Move, i32)> {
        game.preserving_move_lists(|game| self.search_root(game, color, depth))
    }

    fn search_root(&mut self, game: &mut Game, color: Color, depth: u32) -> Option<(Move, i32)> {
        self.nodes_searched = 0;
        let depth = depth.max(1);

        let moves = game.legal_moves(color);
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves.as_slice() {
            let undo = game.make_move(mv, MoveMode::Play);
            let score = self.minimax(game, color, depth - 1, -INFINITY, INFINITY, false);
            game.unmake_move(mv, undo);

            debug!(%mv, score, "root move");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            info!(
                %color,
                depth,
                score,
                nodes = self.nodes_searched,
                best = %mv,
                "search finished"
            );
        }
        best
    }

    /// Searches and plays the best move. Returns false if there was none.
    pub fn make_smart_move(&mut self, game: &mut Game, color: Color, depth: u32) -> bool {
        match self.choose_smart_move(game, color, depth) {
            Some((mv, _)) => {
                game.play_move(mv);
                true
            }
            None => false,
        }
    }

    /// Scores the position for `color`.
    ///
    /// `maximizing` tells whose move it is: `color`'s when true, the
    /// opponent's otherwise. A side without legal moves scores statically.
    pub fn minimax(
        &mut self,
        game: &mut Game,
        color: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return evaluate::evaluate(game.board(), color, &self.config);
        }

        let mover = if maximizing { color } else { color.opponent() };
        let moves = game.legal_moves(mover);
        if moves.is_empty() {
            return evaluate::evaluate(game.board(), color, &self.config);
        }

        if maximizing {
            let mut max_eval = -INFINITY;
            for &mv in moves.as_slice() {
                let undo = game.make_move(mv, MoveMode::Play);
                let score = self.minimax(game, color, depth - 1, alpha, beta, false);
                game.unmake_move(mv, undo);

                max_eval = max_eval.max(score);
                if max_eval >= beta {
                    break; // Beta cutoff
                }
                alpha = alpha.max(max_eval);
            }
            max_eval
        } else {
            let mut min_eval = INFINITY;
            for &mv in moves.as_slice() {
                let undo = game.make_move(mv, MoveMode::Play);
                let score = self.minimax(game, color, depth - 1, alpha, beta, true);
                game.unmake_move(mv, undo);

                min_eval = min_eval.min(score);
                if min_eval <= alpha {
                    break; // Alpha cutoff
                }
                beta = beta.min(min_eval);
            }
            min_eval
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
