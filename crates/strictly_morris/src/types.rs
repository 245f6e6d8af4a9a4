//! Core domain types for Three Men's Morris.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of pieces each player places during the placement phase.
pub const PIECES_PER_PLAYER: usize = 3;

/// Pieces on the board once placement is complete.
pub const TOTAL_PIECES: usize = 2 * PIECES_PER_PLAYER;

/// Player in the game.
///
/// `A` always moves first and is the human in one-player mode. `B` is the
/// computer (or the second human). Search always maximizes for `B`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, Display,
)]
pub enum Player {
    /// Player A (goes first).
    #[display("A")]
    A,
    /// Player B (goes second).
    #[display("B")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Empty cell.
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Occupant {
    /// The owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 morris board.
///
/// A small `Copy` value: every board-producing operation returns a new board,
/// so two game states never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Occupant; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Occupant::Empty; 9],
        }
    }

    /// Returns the occupant of a cell.
    pub fn get(&self, pos: Position) -> Occupant {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `occupant`.
    #[must_use]
    pub fn with(mut self, pos: Position, occupant: Occupant) -> Self {
        self.squares[pos.to_index()] = occupant;
        self
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Occupant::Empty
    }

    /// True if `pos` holds one of `player`'s pieces.
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Occupant::Occupied(player)
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Occupant::Empty)
            .count()
    }

    /// Number of cells held by `player`.
    pub fn count_for(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Occupant::Occupied(player))
            .count()
    }

    /// Cells held by `player`, in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_owned_by(*pos, player))
    }

    /// Empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Occupant; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Occupant::Empty => '-',
                    Occupant::Occupied(Player::A) => 'A',
                    Occupant::Occupied(Player::B) => 'B',
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// A character other than `A`, `B`, `.` or `-`.
    #[display("Unexpected character {_0:?} in board")]
    BadCell(#[error(not(source))] char),

    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(#[error(not(source))] usize),

    /// A player has more pieces than placement allows.
    #[display("Player {_0} has more than 3 pieces")]
    TooManyPieces(#[error(not(source))] Player),
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Reads nine cells of `A`, `B`, `.` or `-` in row-major order.
    /// Whitespace and `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'A' => Ok(Occupant::Occupied(Player::A)),
                'B' => Ok(Occupant::Occupied(Player::B)),
                '.' | '-' => Ok(Occupant::Empty),
                other => Err(ParseBoardError::BadCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Occupant; 9] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(cells.len()))?;
        let board = Board { squares };

        for player in [Player::A, Player::B] {
            if board.count_for(player) > PIECES_PER_PLAYER {
                return Err(ParseBoardError::TooManyPieces(player));
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_with_returns_new_board() {
        let board = Board::new();
        let placed = board.with(Position::Center, Occupant::Occupied(Player::A));
        assert_eq!(board.piece_count(), 0);
        assert_eq!(placed.piece_count(), 1);
        assert_eq!(placed.get(Position::Center), Occupant::Occupied(Player::A));
    }

    #[test]
    fn test_counts_per_player() {
        let board: Board = "AB./.A./..B".parse().unwrap();
        assert_eq!(board.piece_count(), 4);
        assert_eq!(board.count_for(Player::A), 2);
        assert_eq!(board.count_for(Player::B), 2);
        assert_eq!(
            board.pieces_of(Player::B).collect::<Vec<_>>(),
            vec![Position::TopCenter, Position::BottomRight]
        );
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "A-B / --- / B-A".parse().unwrap();
        assert_eq!(board.to_string(), "A - B\n- - -\nB - A");
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "AB".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "AXB......".parse::<Board>(),
            Err(ParseBoardError::BadCell('X'))
        );
        assert_eq!(
            "AAAA.....".parse::<Board>(),
            Err(ParseBoardError::TooManyPieces(Player::A))
        );
    }
}
