//! Game phase and session mode.

use crate::types::{Board, TOTAL_PIECES};
use serde::{Deserialize, Serialize};

/// Stage of play, derived from the number of pieces on the board.
///
/// Never stored: it is recomputed from the board so it cannot drift out of
/// step with it. Pieces are never removed, so once the sixth piece lands the
/// phase stays [`GamePhase::Movement`] for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// Fewer than six pieces placed; each turn places a new piece.
    Placement,
    /// All six pieces placed; each turn slides a piece to an adjacent cell.
    Movement,
}

impl GamePhase {
    /// Phase implied by the board's piece count.
    pub fn of(board: &Board) -> Self {
        if board.piece_count() < TOTAL_PIECES {
            GamePhase::Placement
        } else {
            GamePhase::Movement
        }
    }
}

/// Who sits on the B side.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human (A) against the computer (B).
    #[default]
    #[display("one player")]
    OnePlayer,
    /// Two humans taking turns.
    #[display("two players")]
    TwoPlayer,
}

impl GameMode {
    /// Mode for a given number of human players (1 or 2).
    pub fn from_player_count(players: u8) -> Option<Self> {
        match players {
            1 => Some(GameMode::OnePlayer),
            2 => Some(GameMode::TwoPlayer),
            _ => None,
        }
    }

    /// Number of human players.
    pub fn player_count(self) -> u8 {
        match self {
            GameMode::OnePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }
}
