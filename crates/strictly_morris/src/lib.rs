//! Strictly Morris - Three Men's Morris rules and computer opponent
//!
//! A two-phase game on a 3x3 grid. Each player places three pieces, then
//! slides them one step at a time to orthogonally adjacent empty cells.
//! Three in a row or column wins.
//!
//! # Architecture
//!
//! - **Board**: `Copy` grid of occupants, positions and adjacency
//! - **Rules**: win lines and open-pair detection
//! - **Moves**: legal move generation per phase, move contracts
//! - **Search**: static evaluation, minimax, alpha-beta
//! - **Selector**: difficulty tiers for the computer opponent
//! - **Machine**: the single entry point turning a click into a new state
//!
//! # Example
//!
//! ```
//! use strictly_morris::{Difficulty, Game, GameMode, Player, Position};
//!
//! let mut game = Game::seeded(GameMode::OnePlayer, 7);
//! let state = game.submit(Position::Center, Difficulty::Hard);
//!
//! // The computer has already answered.
//! assert_eq!(state.current_player(), Player::A);
//! assert_eq!(state.board().piece_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod eval;
mod invariants;
mod machine;
mod movegen;
mod phases;
mod position;
mod rules;
mod search;
mod selector;
mod state;
mod types;

// Crate-level exports - Board model
pub use position::{Direction, OutOfRange, ParsePositionError, Position, is_adjacent};
pub use types::{Board, Occupant, PIECES_PER_PLAYER, ParseBoardError, Player, TOTAL_PIECES};

// Crate-level exports - Rules
pub use rules::{LINES, WIN_CHECK_MIN_PIECES, has_open_pair, has_winner, winner};

// Crate-level exports - Moves and contracts
pub use action::{Move, MoveError};
pub use contracts::{
    Contract, GameNotOver, IsAdjacent, LegalMove, MoveContract, OwnsPiece, PhaseAllows,
    PlayersTurn, SquareIsEmpty,
};
pub use movegen::legal_moves;

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MorrisInvariants, PieceCountInvariant,
    SelectionOwnedInvariant, TurnBalanceInvariant,
};

// Crate-level exports - Evaluation and search
pub use eval::{A_THREATENS, A_WINS, B_THREATENS, B_WINS, NEUTRAL, Score, evaluate};
pub use search::{SearchResult, alpha_beta, minimax};

// Crate-level exports - Computer opponent
pub use selector::{
    Difficulty, HARD_DEPTH_MAX, HARD_DEPTH_MIN, NORMAL_DEPTH, NORMAL_RANDOM_CHANCE, SearchPolicy,
    next_computer_move,
};

// Crate-level exports - Game state machine
pub use machine::{Game, apply_human_input};
pub use phases::{GameMode, GamePhase};
pub use state::GameState;
