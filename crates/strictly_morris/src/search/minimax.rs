//! Plain minimax.

use super::{SearchResult, improves, side_to_move};
use crate::action::Move;
use crate::eval::{NEUTRAL, Score, evaluate};
use crate::movegen::legal_moves;
use crate::rules::winner;
use crate::state::GameState;
use crate::types::Board;
use tracing::{debug, instrument};

/// Full-width minimax from `state`'s board to `depth` plies.
///
/// Stops at depth 0 or when either player holds a line and scores the leaf
/// with [`evaluate`]. A node whose side to move has no legal move scores
/// [`NEUTRAL`] with no move.
#[instrument(skip(state), fields(pieces = state.board().piece_count()))]
pub fn minimax(state: &GameState, depth: u32, maximizing: bool) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = search(state.board(), depth, maximizing, &mut nodes);
    debug!(?best_move, score, nodes, "Minimax finished");
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn search(board: &Board, depth: u32, maximizing: bool, nodes: &mut u64) -> (Option<Move>, Score) {
    *nodes += 1;
    if depth == 0 || winner(board).is_some() {
        return (None, evaluate(board));
    }

    let mut best: Option<(Move, Score)> = None;
    for mv in legal_moves(board, side_to_move(maximizing)) {
        let child = mv.apply_to(*board);
        let (_, score) = search(&child, depth - 1, !maximizing, nodes);
        if improves(best.map(|(_, s)| s), score, maximizing) {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, NEUTRAL),
    }
}
