//! The random-move player.

use crate::constants::Color;
use crate::game::Game;
use crate::movelist::MoveList;
use crate::r#move::Move;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Splits the legal moves of `color` into check evasions and the rest.
///
/// Both lists only hold moves that pass the self-check filter. While `color`
/// is in check every legal move is an evasion, so one of the two lists is
/// always empty.
pub fn partition_moves(game: &mut Game, color: Color) -> (MoveList, MoveList) {
    let legal = game.legal_moves(color);
    let in_check = game.is_in_check(color);

    let mut evasions: MoveList = MoveList::new();
    let mut others: MoveList = MoveList::new();
    for &mv in legal.as_slice() {
        if in_check {
            evasions.add(mv);
        } else {
            others.add(mv);
        }
    }
    (evasions, others)
}

/// Draws a move uniformly, preferring check evasions when there are any.
pub fn choose_random_move<R: Rng + ?Sized>(
    game: &mut Game,
    color: Color,
    rng: &mut R,
) -> Option<Move> {
    let (evasions, others) = partition_moves(game, color);
    let pool = if evasions.is_empty() { &others } else { &evasions };
    pool.as_slice().choose(rng).copied()
}

/// Plays a random legal move for `color`. Returns false if there was none.
pub fn make_random_move<R: Rng + ?Sized>(game: &mut Game, color: Color, rng: &mut R) -> bool {
    match choose_random_move(game, color, rng) {
        Some(mv) => {
            debug!(%color, %mv, "random move");
            game.play_move(mv);
            true
        }
        None => false,
    }
}
