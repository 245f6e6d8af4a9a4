//! Static evaluation of a position at a search leaf.
//!
//! Scores are from B's point of view: B maximizes, A minimizes.

use crate::phases::GamePhase;
use crate::rules::{has_open_pair, winner};
use crate::types::{Board, Player};

/// A position score. Positive favours B, negative favours A.
pub type Score = i32;

/// Score of a position A has won.
pub const A_WINS: Score = -10;
/// Score of a position B has won.
pub const B_WINS: Score = 10;
/// Placement-phase position where A threatens to complete a line.
pub const A_THREATENS: Score = -5;
/// Placement-phase position where B threatens to complete a line.
pub const B_THREATENS: Score = 5;
/// Anything else.
pub const NEUTRAL: Score = 0;

/// Scores `board`.
///
/// 1. A line held by A scores [`A_WINS`], by B [`B_WINS`].
/// 2. During placement, an open pair (two in a line, third cell empty) for A
///    scores [`A_THREATENS`]; otherwise one for B scores [`B_THREATENS`].
/// 3. Everything else, including every non-terminal movement-phase
///    position, is [`NEUTRAL`].
pub fn evaluate(board: &Board) -> Score {
    match winner(board) {
        Some(Player::A) => return A_WINS,
        Some(Player::B) => return B_WINS,
        None => {}
    }

    if GamePhase::of(board) == GamePhase::Movement {
        return NEUTRAL;
    }

    if has_open_pair(board, Player::A) {
        A_THREATENS
    } else if has_open_pair(board, Player::B) {
        B_THREATENS
    } else {
        NEUTRAL
    }
}
