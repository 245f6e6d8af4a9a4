//! Turn balance invariant: A moves first, so A never trails B.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: A has as many pieces as B, or exactly one more.
pub struct TurnBalanceInvariant;

impl Invariant<GameState> for TurnBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let a = state.board().count_for(Player::A);
        let b = state.board().count_for(Player::B);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Player A has the same number of pieces as B or one more"
    }
}
