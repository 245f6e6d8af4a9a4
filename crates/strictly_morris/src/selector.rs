//! Difficulty policy for the computer opponent (always player B).
//!
//! Randomness comes from a caller-supplied [`Rng`], so a seeded generator
//! makes every choice reproducible.

use crate::action::Move;
use crate::search::{alpha_beta, minimax};
use crate::state::GameState;
use crate::types::Player;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Fixed search depth on `normal`.
pub const NORMAL_DEPTH: u32 = 3;
/// Chance that `normal` plays a random move instead of searching.
pub const NORMAL_RANDOM_CHANCE: f64 = 0.5;
/// Shallowest search on `hard`.
pub const HARD_DEPTH_MIN: u32 = 2;
/// Deepest search on `hard`.
pub const HARD_DEPTH_MAX: u32 = 5;

/// Strength of the computer opponent.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[default]
    Easy,
    /// Half random, half depth-3 minimax.
    Normal,
    /// Alpha-beta at a random depth in `[2, 5]`.
    Hard,
}

/// How one computer move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPolicy {
    /// Uniform pick among legal moves.
    Random,
    /// Plain minimax to the given depth.
    Minimax {
        /// Plies searched.
        depth: u32,
    },
    /// Alpha-beta to the given depth.
    AlphaBeta {
        /// Plies searched.
        depth: u32,
    },
}

impl SearchPolicy {
    /// Draws the policy for one move at `difficulty`.
    ///
    /// `hard` draws a fresh depth on every call.
    pub fn draw<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        match difficulty {
            Difficulty::Easy => SearchPolicy::Random,
            Difficulty::Normal => {
                if rng.random_bool(NORMAL_RANDOM_CHANCE) {
                    SearchPolicy::Random
                } else {
                    SearchPolicy::Minimax {
                        depth: NORMAL_DEPTH,
                    }
                }
            }
            Difficulty::Hard => SearchPolicy::AlphaBeta {
                depth: rng.random_range(HARD_DEPTH_MIN..=HARD_DEPTH_MAX),
            },
        }
    }

    /// Search depth, if this policy searches.
    pub fn depth(&self) -> Option<u32> {
        match *self {
            SearchPolicy::Random => None,
            SearchPolicy::Minimax { depth } | SearchPolicy::AlphaBeta { depth } => Some(depth),
        }
    }
}

/// Chooses B's next move at `difficulty`.
///
/// The result is always one of `state.legal_moves(Player::B)`. `None` means
/// B has no legal move and the turn passes.
#[instrument(skip(state, rng), fields(phase = %state.phase()))]
pub fn next_computer_move<R: Rng>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = state.legal_moves(Player::B);
    if moves.is_empty() {
        debug!("Computer has no legal move");
        return None;
    }

    let policy = SearchPolicy::draw(difficulty, rng);
    let searched = match policy {
        SearchPolicy::Random => None,
        SearchPolicy::Minimax { depth } => minimax(state, depth, true).best_move,
        SearchPolicy::AlphaBeta { depth } => alpha_beta(state, depth, true).best_move,
    };

    let chosen = match searched {
        Some(mv) => Some(mv),
        None => {
            if policy != SearchPolicy::Random {
                warn!(?policy, "Search returned no move, falling back to random");
            }
            moves.choose(rng).copied()
        }
    };
    debug!(?policy, ?chosen, "Computer move chosen");
    chosen
}
