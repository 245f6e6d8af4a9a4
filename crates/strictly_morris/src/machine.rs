//! The game state machine: the single mutation entry point.
//!
//! A click on a cell goes in and a new [`GameState`] comes out. Illegal
//! clicks return the state unchanged. In one-player mode a click that hands
//! the turn to B also carries B's reply, so callers never see a state with
//! the computer to move.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::phases::{GameMode, GamePhase};
use crate::position::Position;
use crate::rules::{WIN_CHECK_MIN_PIECES, has_winner};
use crate::selector::{Difficulty, next_computer_move};
use crate::state::GameState;
use crate::types::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Applies a human click at `at` and, in one-player mode, the computer's
/// reply.
///
/// - Terminal states ignore every click.
/// - Placement: an empty cell receives the current player's piece.
/// - Movement, nothing selected: an own piece becomes selected.
/// - Movement, piece selected: the same cell deselects, another own piece
///   changes the selection, an empty adjacent cell receives the slide.
///
/// Anything else returns `state` unchanged.
#[instrument(skip(state, rng), fields(player = %state.current_player(), phase = %state.phase()))]
pub fn apply_human_input<R: Rng>(
    state: &GameState,
    at: Position,
    difficulty: Difficulty,
    rng: &mut R,
) -> GameState {
    if state.is_terminal() {
        debug!("Game is over, ignoring input");
        return *state;
    }

    let after_human = match (state.phase(), state.selected()) {
        (GamePhase::Placement, _) => play(state, Move::place(state.current_player(), at)),
        (GamePhase::Movement, None) => select(state, at),
        (GamePhase::Movement, Some(from)) if from == at => {
            debug!(position = %at, "Deselecting piece");
            state.without_selection()
        }
        (GamePhase::Movement, Some(_)) if state.board().is_owned_by(at, state.current_player()) => {
            debug!(position = %at, "Changing selection");
            state.with_selection(at)
        }
        (GamePhase::Movement, Some(from)) => {
            play(state, Move::slide(state.current_player(), from, at))
        }
    };

    let computer_to_move = state.mode() == GameMode::OnePlayer
        && !after_human.is_terminal()
        && after_human.current_player() == Player::B
        && after_human.current_player() != state.current_player();
    if computer_to_move {
        computer_reply(&after_human, difficulty, rng)
    } else {
        after_human
    }
}

/// Selects `at` if it holds the current player's piece.
fn select(state: &GameState, at: Position) -> GameState {
    if state.board().is_owned_by(at, state.current_player()) {
        debug!(position = %at, "Selecting piece");
        state.with_selection(at)
    } else {
        debug!(position = %at, "Nothing to select");
        *state
    }
}

/// Validates and applies `mv`, then checks whether the mover won.
fn play(state: &GameState, mv: Move) -> GameState {
    if let Err(error) = MoveContract::pre(state, &mv) {
        debug!(%error, %mv, "Rejected move");
        return *state;
    }

    let mut next = state.after_move(mv);
    if next.board().piece_count() >= WIN_CHECK_MIN_PIECES && has_winner(next.board(), mv.player())
    {
        info!(winner = %mv.player(), "Line completed");
        next = next.won_by(mv.player());
    }

    #[cfg(debug_assertions)]
    if let Err(error) = MoveContract::post(state, &next) {
        tracing::warn!(%error, "Transition broke an invariant");
    }

    debug!(%mv, "Move applied");
    next
}

/// Plays B's reply, or passes the turn back to A if B cannot move.
fn computer_reply<R: Rng>(state: &GameState, difficulty: Difficulty, rng: &mut R) -> GameState {
    match next_computer_move(state, difficulty, rng) {
        Some(mv) => {
            info!(%mv, %difficulty, "Computer reply");
            play(state, mv)
        }
        None => {
            info!("Computer cannot move, passing");
            state.passed()
        }
    }
}

/// A game session: the current state plus the randomness behind the
/// computer opponent.
///
/// This is what a view layer holds. It submits clicks through
/// [`Game::submit`] and renders [`Game::state`].
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Creates a new game seeded from the operating system.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a new game whose computer moves are reproducible.
    #[instrument]
    pub fn seeded(mode: GameMode, seed: u64) -> Self {
        Self {
            state: GameState::new(mode),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Submits a click and returns the resulting snapshot.
    #[instrument(skip(self))]
    pub fn submit(&mut self, at: Position, difficulty: Difficulty) -> GameState {
        self.state = apply_human_input(&self.state, at, difficulty, &mut self.rng);
        self.state
    }

    /// Discards the current game and starts over in the same mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> GameState {
        info!(mode = %self.state.mode(), "Restarting game");
        self.state = GameState::new(self.state.mode());
        self.state
    }
}
