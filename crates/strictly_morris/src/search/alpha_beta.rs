//! Minimax with alpha-beta pruning.

use super::{SearchResult, improves, side_to_move};
use crate::action::Move;
use crate::eval::{NEUTRAL, Score, evaluate};
use crate::movegen::legal_moves;
use crate::rules::winner;
use crate::state::GameState;
use crate::types::Board;
use tracing::{debug, instrument};

/// Alpha-beta search from `state`'s board to `depth` plies.
///
/// Same leaves, move order and tie-break as [`minimax`](super::minimax),
/// so the chosen move and root score are identical; siblings are skipped
/// once `beta <= alpha`.
#[instrument(skip(state), fields(pieces = state.board().piece_count()))]
pub fn alpha_beta(state: &GameState, depth: u32, maximizing: bool) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = search(
        state.board(),
        depth,
        maximizing,
        Score::MIN,
        Score::MAX,
        &mut nodes,
    );
    debug!(?best_move, score, nodes, "Alpha-beta finished");
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn search(
    board: &Board,
    depth: u32,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    nodes: &mut u64,
) -> (Option<Move>, Score) {
    *nodes += 1;
    if depth == 0 || winner(board).is_some() {
        return (None, evaluate(board));
    }

    let mut best: Option<(Move, Score)> = None;
    for mv in legal_moves(board, side_to_move(maximizing)) {
        let child = mv.apply_to(*board);
        let (_, score) = search(&child, depth - 1, !maximizing, alpha, beta, nodes);
        if improves(best.map(|(_, s)| s), score, maximizing) {
            best = Some((mv, score));
        }

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, NEUTRAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::B_WINS;
    use crate::phases::GameMode;
    use crate::position::Position;
    use crate::search::minimax;
    use crate::types::Player;

    fn state(text: &str) -> GameState {
        GameState::from_board(text.parse().unwrap(), Player::B, GameMode::OnePlayer)
    }

    #[test]
    fn test_takes_immediate_win() {
        let result = alpha_beta(&state("A.A/BB./A.."), 3, true);
        assert_eq!(
            result.best_move,
            Some(Move::place(Player::B, Position::MiddleRight))
        );
        assert_eq!(result.score, B_WINS);
    }

    #[test]
    fn test_prunes_without_changing_choice() {
        let position = state("AA./B../...");
        let plain = minimax(&position, 4, true);
        let pruned = alpha_beta(&position, 4, true);
        assert_eq!(pruned.best_move, plain.best_move);
        assert_eq!(pruned.score, plain.score);
        assert!(pruned.nodes < plain.nodes);
    }

    #[test]
    fn test_blocked_side_scores_neutral() {
        let result = alpha_beta(&state("BBA/BA./A.."), 5, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, NEUTRAL);
    }
}
