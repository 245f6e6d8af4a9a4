//! Two-in-a-line detection used by the evaluator.

use super::win::LINES;
use crate::types::{Board, Occupant, Player};

/// True if some line holds exactly two of `player`'s pieces and its third
/// cell is empty.
pub fn has_open_pair(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.is_owned_by(**pos, player))
            .count();
        let empty = line
            .iter()
            .filter(|pos| board.get(**pos) == Occupant::Empty)
            .count();
        owned == 2 && empty == 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_pair_in_row() {
        let board: Board = "AA./B../...".parse().unwrap();
        assert!(has_open_pair(&board, Player::A));
        assert!(!has_open_pair(&board, Player::B));
    }

    #[test]
    fn test_blocked_pair_is_not_open() {
        let board: Board = "AAB/.../...".parse().unwrap();
        assert!(!has_open_pair(&board, Player::A));
    }

    #[test]
    fn test_open_pair_in_column() {
        let board: Board = ".B./.B./A..".parse().unwrap();
        assert!(has_open_pair(&board, Player::B));
    }

    #[test]
    fn test_diagonal_pair_ignored() {
        let board: Board = "A../.A./...".parse().unwrap();
        assert!(!has_open_pair(&board, Player::A));
    }
}
