//! Contract-based validation for morris moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, MorrisInvariants};
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a finished game.
    pub fn check(_mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not on turn.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.player() != state.current_player() {
            Err(MoveError::WrongPlayer(mov.player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: Placements only while placing, slides only while moving.
pub struct PhaseAllows;

impl PhaseAllows {
    /// Rejects a move whose kind does not match the phase.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let phase = state.phase();
        if mov.phase() != phase {
            Err(MoveError::WrongPhase {
                kind: mov.phase(),
                phase,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: The destination must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(mov.target()) {
            Err(MoveError::SquareOccupied(mov.target()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: A slide moves one of the mover's own pieces.
pub struct OwnsPiece;

impl OwnsPiece {
    /// Rejects slides from a cell the mover does not hold.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        match mov.source() {
            Some(from) if !state.board().is_owned_by(from, mov.player()) => {
                Err(MoveError::NotOwnPiece(from))
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: A slide goes exactly one step orthogonally.
pub struct IsAdjacent;

impl IsAdjacent {
    /// Rejects slides to non-neighbouring cells.
    pub fn check(mov: &Move, _state: &GameState) -> Result<(), MoveError> {
        match mov.source() {
            Some(from) if !from.is_adjacent_to(mov.target()) => Err(MoveError::NotAdjacent {
                from,
                to: mov.target(),
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: every check above.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state), fields(player = %state.current_player()))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        PhaseAllows::check(mov, state)?;
        SquareIsEmpty::check(mov, state)?;
        OwnsPiece::check(mov, state)?;
        IsAdjacent::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions: every state invariant in [`MorrisInvariants`].
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        MorrisInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
