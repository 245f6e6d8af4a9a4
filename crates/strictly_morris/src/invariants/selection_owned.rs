//! Selection invariant: only the player to move's own piece can be selected.

use super::Invariant;
use crate::phases::GamePhase;
use crate::state::GameState;

/// Invariant: a selection exists only in the movement phase and points at a
/// piece of the current player.
pub struct SelectionOwnedInvariant;

impl Invariant<GameState> for SelectionOwnedInvariant {
    fn holds(state: &GameState) -> bool {
        match state.selected() {
            None => true,
            Some(pos) => {
                state.phase() == GamePhase::Movement
                    && state.board().is_owned_by(pos, state.current_player())
            }
        }
    }

    fn description() -> &'static str {
        "Selected piece belongs to the current player during movement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::GameMode;
    use crate::position::Position;
    use crate::types::{Board, Player};

    fn movement_state() -> GameState {
        let board: Board = "ABA/BAB/...".parse().unwrap();
        GameState::from_board(board, Player::A, GameMode::OnePlayer)
    }

    #[test]
    fn test_no_selection_holds() {
        assert!(SelectionOwnedInvariant::holds(&movement_state()));
    }

    #[test]
    fn test_own_piece_holds() {
        let state = movement_state().with_selection(Position::Center);
        assert!(SelectionOwnedInvariant::holds(&state));
    }

    #[test]
    fn test_opponent_piece_violates() {
        let state = movement_state().with_selection(Position::TopCenter);
        assert!(!SelectionOwnedInvariant::holds(&state));
    }

    #[test]
    fn test_selection_during_placement_violates() {
        let state = GameState::new(GameMode::OnePlayer).with_selection(Position::Center);
        assert!(!SelectionOwnedInvariant::holds(&state));
    }
}
