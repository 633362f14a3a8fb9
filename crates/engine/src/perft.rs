use crate::constants::Color;
use crate::game::{Game, MoveMode};

/// Counts the leaf positions reachable in `depth` plies with `color` to move.
pub fn perft(game: &mut Game, color: Color, depth: u32) -> u64 {
    game.preserving_move_lists(|game| count_leaves(game, color, depth))
}

fn count_leaves(game: &mut Game, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves(color);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.as_slice() {
        let undo = game.make_move(mv, MoveMode::Play);
        nodes += count_leaves(game, color.opponent(), depth - 1);
        game.unmake_move(mv, undo);
    }
    nodes
}
