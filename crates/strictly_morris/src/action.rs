//! First-class move types for Three Men's Morris.
//!
//! Moves are domain values: generated by the rules, chosen by the search,
//! validated by contracts and only then applied to a board.

use crate::phases::GamePhase;
use crate::position::Position;
use crate::types::{Board, Occupant, Player};
use serde::{Deserialize, Serialize};

/// A move, always attributed to exactly one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a new piece on an empty cell (placement phase only).
    Place {
        /// The player placing.
        player: Player,
        /// Destination cell.
        to: Position,
    },
    /// Slide an own piece to an empty, orthogonally adjacent cell
    /// (movement phase only).
    Slide {
        /// The player moving.
        player: Player,
        /// Cell the piece leaves.
        from: Position,
        /// Cell the piece enters.
        to: Position,
    },
}

impl Move {
    /// Creates a placement move.
    pub fn place(player: Player, to: Position) -> Self {
        Move::Place { player, to }
    }

    /// Creates a slide move.
    pub fn slide(player: Player, from: Position, to: Position) -> Self {
        Move::Slide { player, from, to }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        match *self {
            Move::Place { player, .. } | Move::Slide { player, .. } => player,
        }
    }

    /// Cell that ends up holding the piece.
    pub fn target(&self) -> Position {
        match *self {
            Move::Place { to, .. } | Move::Slide { to, .. } => to,
        }
    }

    /// Cell the piece leaves, for slides.
    pub fn source(&self) -> Option<Position> {
        match *self {
            Move::Place { .. } => None,
            Move::Slide { from, .. } => Some(from),
        }
    }

    /// Phase in which this kind of move is legal.
    pub fn phase(&self) -> GamePhase {
        match self {
            Move::Place { .. } => GamePhase::Placement,
            Move::Slide { .. } => GamePhase::Movement,
        }
    }

    /// Board after this move, without legality checks.
    ///
    /// Callers validate first (see [`LegalMove`](crate::LegalMove)); the
    /// generator only produces moves that pass.
    #[must_use]
    pub fn apply_to(&self, board: Board) -> Board {
        match *self {
            Move::Place { player, to } => board.with(to, Occupant::Occupied(player)),
            Move::Slide { player, from, to } => board
                .with(from, Occupant::Empty)
                .with(to, Occupant::Occupied(player)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { player, to } => write!(f, "{player} places at {}", to.label()),
            Move::Slide { player, from, to } => {
                write!(f, "{player} slides {} -> {}", from.label(), to.label())
            }
        }
    }
}

/// Why a move was refused.
///
/// Never surfaced by the state machine, which answers illegal input with the
/// unchanged state; used by contracts, logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The destination is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// A placement during movement or a slide during placement.
    #[display("{kind} moves are not allowed in the {phase} phase")]
    WrongPhase {
        /// Phase the move belongs to.
        kind: GamePhase,
        /// Phase the game is in.
        phase: GamePhase,
    },

    /// The source cell does not hold the mover's piece.
    #[display("{_0} does not hold a piece of the moving player")]
    NotOwnPiece(#[error(not(source))] Position),

    /// Slide destination is not orthogonally adjacent to the source.
    #[display("{to} is not adjacent to {from}")]
    NotAdjacent {
        /// Cell the piece would leave.
        from: Position,
        /// Requested destination.
        to: Position,
    },

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_applies_to_copy() {
        let board = Board::new();
        let after = Move::place(Player::A, Position::Center).apply_to(board);
        assert!(board.is_empty(Position::Center));
        assert!(after.is_owned_by(Position::Center, Player::A));
    }

    #[test]
    fn test_slide_vacates_source() {
        let board: Board = "A../.../...".parse().unwrap();
        let after = Move::slide(Player::A, Position::TopLeft, Position::TopCenter).apply_to(board);
        assert!(after.is_empty(Position::TopLeft));
        assert!(after.is_owned_by(Position::TopCenter, Player::A));
        assert_eq!(after.piece_count(), board.piece_count());
    }

    #[test]
    fn test_accessors() {
        let mv = Move::slide(Player::B, Position::Center, Position::MiddleLeft);
        assert_eq!(mv.player(), Player::B);
        assert_eq!(mv.source(), Some(Position::Center));
        assert_eq!(mv.target(), Position::MiddleLeft);
        assert_eq!(mv.phase(), GamePhase::Movement);
        assert_eq!(Move::place(Player::A, Position::Center).source(), None);
    }
}
