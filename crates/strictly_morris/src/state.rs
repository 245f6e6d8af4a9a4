//! Immutable game state snapshot.

use crate::action::Move;
use crate::movegen::legal_moves;
use crate::phases::{GameMode, GamePhase};
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// A `Copy` value. Transitions build a new state and never touch the old one;
/// the view layer renders whatever snapshot it holds.
///
/// Invariants (checked in debug builds, see [`MorrisInvariants`](crate::MorrisInvariants)):
/// - at most three pieces per player, so at most six in total
/// - `selected`, when set, is in the movement phase and holds a piece of
///   `current_player`
/// - once `winner` is set the state accepts no further transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    current_player: Player,
    /// Piece picked up for a slide.
    selected: Option<Position>,
    /// Set once a player completes a line.
    winner: Option<Player>,
    /// One or two human players.
    mode: GameMode,
}

impl GameState {
    /// Creates a fresh game: empty board, A to move, nothing selected.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            selected: None,
            winner: None,
            mode,
        }
    }

    /// Builds a mid-game state from a board, with no selection or winner.
    ///
    /// Used for analysis and tests; the winner is filled in if the board
    /// already holds a line.
    pub fn from_board(board: Board, current_player: Player, mode: GameMode) -> Self {
        Self {
            board,
            current_player,
            selected: None,
            winner: crate::rules::winner(&board),
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Phase derived from the board.
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(&self.board)
    }

    /// Currently selected piece, if any.
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True once a winner is set.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal moves for `player` in this state. Empty once the game is won.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        legal_moves(&self.board, player)
    }

    /// Prompt for the player to move.
    pub fn instruction(&self) -> String {
        if let Some(winner) = self.winner {
            return format!("Player {winner} wins");
        }
        let player = self.current_player;
        match (self.phase(), self.selected) {
            (GamePhase::Placement, _) => format!("Player {player}, place a piece"),
            (GamePhase::Movement, None) => format!("Player {player}, select a piece to move"),
            (GamePhase::Movement, Some(_)) => {
                format!("Player {player}, move the selected piece")
            }
        }
    }

    // ── transitions ────────────────────────────────────────────
    // Each returns a new state; none validates. The state machine and
    // contracts decide legality first.

    /// State after `mv`: board updated, selection cleared, turn passed.
    pub(crate) fn after_move(self, mv: Move) -> Self {
        Self {
            board: mv.apply_to(self.board),
            current_player: mv.player().opponent(),
            selected: None,
            ..self
        }
    }

    /// State with `pos` selected.
    pub(crate) fn with_selection(self, pos: Position) -> Self {
        Self {
            selected: Some(pos),
            ..self
        }
    }

    /// State with the selection cleared.
    pub(crate) fn without_selection(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }

    /// State with the turn handed to the other player and no board change.
    pub(crate) fn passed(self) -> Self {
        Self {
            current_player: self.current_player.opponent(),
            selected: None,
            ..self
        }
    }

    /// Terminal state won by `player`.
    pub(crate) fn won_by(self, player: Player) -> Self {
        Self {
            winner: Some(player),
            selected: None,
            ..self
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
