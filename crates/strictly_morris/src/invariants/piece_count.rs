//! Piece count invariant: no player ever holds more than three pieces.

use super::Invariant;
use crate::state::GameState;
use crate::types::{PIECES_PER_PLAYER, Player};

/// Invariant: at most three pieces per player, hence at most six in total.
///
/// Pieces are created only by placement and never removed, so the count
/// grows to six and then stays there.
pub struct PieceCountInvariant;

impl Invariant<GameState> for PieceCountInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        board.count_for(Player::A) <= PIECES_PER_PLAYER
            && board.count_for(Player::B) <= PIECES_PER_PLAYER
    }

    fn description() -> &'static str {
        "Each player has at most three pieces"
    }
}
