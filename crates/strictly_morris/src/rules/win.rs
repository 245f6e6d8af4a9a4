//! Win detection.
//!
//! The winning lines are the three rows and the three columns. Diagonals do
//! not win in this variant.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The six lines that win when fully held by one player.
pub const LINES: [[Position; 3]; 6] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

/// Fewest pieces on the board at which the game loop bothers checking for a
/// win. With alternating placement nobody can hold three in a line earlier.
/// [`has_winner`] is still correct below this count.
pub const WIN_CHECK_MIN_PIECES: usize = 5;

/// True iff `player` fully occupies any line.
#[instrument(level = "trace")]
pub fn has_winner(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.is_owned_by(*pos, player)))
}

/// The player holding a complete line, if any. `A` is reported first if both
/// somehow do.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::A, Player::B]
        .into_iter()
        .find(|player| has_winner(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_winner(&board, Player::A));
        assert!(!has_winner(&board, Player::B));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "AAA/BB./...".parse().unwrap();
        assert!(has_winner(&board, Player::A));
        assert!(!has_winner(&board, Player::B));
        assert_eq!(winner(&board), Some(Player::A));
    }

    #[test]
    fn test_every_row_and_column_wins() {
        for line in LINES {
            let board = line.iter().fold(Board::new(), |b, pos| {
                b.with(*pos, crate::types::Occupant::Occupied(Player::B))
            });
            assert!(has_winner(&board, Player::B), "line {line:?} should win");
        }
    }

    #[test]
    fn test_diagonal_does_not_win() {
        let main: Board = "A../.A./..A".parse().unwrap();
        assert!(!has_winner(&main, Player::A));
        let anti: Board = "..B/.B./B..".parse().unwrap();
        assert!(!has_winner(&anti, Player::B));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "AA./B.B/...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_correct_below_guard_count() {
        // Three pieces can never arise in play but must still be judged.
        let board: Board = ".../AAA/...".parse().unwrap();
        assert!(board.piece_count() < WIN_CHECK_MIN_PIECES);
        assert!(has_winner(&board, Player::A));
    }
}
