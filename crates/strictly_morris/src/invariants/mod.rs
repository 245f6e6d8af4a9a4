//! First-class invariants for morris game states.
//!
//! Invariants are logical properties that must hold for every reachable
//! state. They are testable independently and are checked as postconditions
//! of every transition in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod piece_count;
pub mod selection_owned;
pub mod turn_balance;

pub use piece_count::PieceCountInvariant;
pub use selection_owned::SelectionOwnedInvariant;
pub use turn_balance::TurnBalanceInvariant;

/// All morris invariants as a composable set.
pub type MorrisInvariants = (
    PieceCountInvariant,
    TurnBalanceInvariant,
    SelectionOwnedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::GameMode;
    use crate::state::GameState;
    use crate::types::{Board, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new(GameMode::OnePlayer);
        assert!(MorrisInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // B has moved twice in a row and A is somehow on turn with a
        // selection during placement.
        let board: Board = "BB./.../...".parse().unwrap();
        let state = GameState::from_board(board, Player::A, GameMode::OnePlayer)
            .with_selection(crate::Position::TopLeft);
        let violations = MorrisInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            TurnBalanceInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            SelectionOwnedInvariant::description()
        );
    }
}
