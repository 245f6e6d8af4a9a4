//! Tests for the computer opponent's difficulty tiers.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_morris::{
    Difficulty, GameMode, GameState, HARD_DEPTH_MAX, HARD_DEPTH_MIN, Player, Position, SearchPolicy,
    legal_moves, next_computer_move,
};
use strum::IntoEnumIterator;

fn mid_game() -> GameState {
    // A . .
    // . B .
    // A . .
    GameState::from_board("A../.B./A..".parse().unwrap(), Player::B, GameMode::OnePlayer)
}

fn movement() -> GameState {
    // A B A
    // B A B
    // . . .
    GameState::from_board("ABA/BAB/...".parse().unwrap(), Player::B, GameMode::OnePlayer)
}

#[test]
fn test_easy_moves_are_always_legal() {
    let state = mid_game();
    let legal = legal_moves(state.board(), Player::B);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..1000 {
        let mv = next_computer_move(&state, Difficulty::Easy, &mut rng).unwrap();
        assert!(legal.contains(&mv), "{mv} is not legal");
    }
}

#[test]
fn test_easy_eventually_tries_every_move() {
    let state = mid_game();
    let legal = legal_moves(state.board(), Player::B);
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = Vec::new();
    for _ in 0..1000 {
        let mv = next_computer_move(&state, Difficulty::Easy, &mut rng).unwrap();
        if !seen.contains(&mv) {
            seen.push(mv);
        }
    }
    assert_eq!(seen.len(), legal.len());
}

#[test]
fn test_hard_depth_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..1000 {
        let depth = SearchPolicy::draw(Difficulty::Hard, &mut rng).depth().unwrap();
        assert!((HARD_DEPTH_MIN..=HARD_DEPTH_MAX).contains(&depth));
    }
}

#[test]
fn test_every_tier_plays_legally_in_both_phases() {
    let mut rng = StdRng::seed_from_u64(31);
    for state in [GameState::new(GameMode::OnePlayer), mid_game(), movement()] {
        let legal = legal_moves(state.board(), Player::B);
        for difficulty in Difficulty::iter() {
            for _ in 0..25 {
                let mv = next_computer_move(&state, difficulty, &mut rng).unwrap();
                assert_eq!(mv.player(), Player::B);
                assert!(legal.contains(&mv), "{difficulty} chose illegal {mv}");
            }
        }
    }
}

#[test]
fn test_hard_blocks_an_open_pair() {
    // A A .
    // B . .
    // . . .
    let state =
        GameState::from_board("AA./B../...".parse().unwrap(), Player::B, GameMode::OnePlayer);
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..20 {
        let mv = next_computer_move(&state, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(mv.target(), Position::TopRight);
    }
}
