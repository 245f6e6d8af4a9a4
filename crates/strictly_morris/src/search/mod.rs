//! Adversarial search over morris positions.
//!
//! B is always the maximizing side and A the minimizing side, whichever of
//! them the computer happens to be. Both engines enumerate moves in
//! generator order and keep the first of equally scored moves, so they pick
//! the same move for the same position and depth.

mod alpha_beta;
mod minimax;

pub use alpha_beta::alpha_beta;
pub use minimax::minimax;

use crate::action::Move;
use crate::eval::Score;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the side to move; `None` at a leaf or when that side
    /// has no legal move.
    pub best_move: Option<Move>,
    /// Score of the position under best play to the searched depth.
    pub score: Score,
    /// Positions visited, including the root.
    pub nodes: u64,
}

/// Side whose moves are enumerated at a node.
pub(crate) fn side_to_move(maximizing: bool) -> Player {
    if maximizing { Player::B } else { Player::A }
}

/// True if `candidate` replaces `current` as the best score. Strict, so the
/// earliest of equal moves is kept.
pub(crate) fn improves(current: Option<Score>, candidate: Score, maximizing: bool) -> bool {
    match current {
        None => true,
        Some(best) if maximizing => candidate > best,
        Some(best) => candidate < best,
    }
}
