//! Cell coordinates on the 3x3 morris board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed by row and column.
///
/// Every value of this type is on the board, so core operations never need
/// to bounds-check. Raw `(row, col)` pairs enter through
/// [`Position::from_row_col`], which is the only place an out-of-range
/// coordinate is reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

/// A coordinate outside `[0, 2]` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
pub struct OutOfRange {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// Text that names no cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized position: {input:?}")]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

/// Orthogonal step directions, in move-generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Column - 1.
    Left,
    /// Column + 1.
    Right,
    /// Row - 1.
    Up,
    /// Row + 1.
    Down,
}

impl Direction {
    /// All directions in the order slides are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a row and column, each in `[0, 2]`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, OutOfRange> {
        if row > 2 || col > 2 {
            return Err(OutOfRange { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The neighbouring cell one step in `direction`, if it is on the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = (self.row(), self.col());
        match direction {
            Direction::Left => col.checked_sub(1).map(|c| Self::ALL[row * 3 + c]),
            Direction::Right if col < 2 => Some(Self::ALL[row * 3 + col + 1]),
            Direction::Up => row.checked_sub(1).map(|r| Self::ALL[r * 3 + col]),
            Direction::Down if row < 2 => Some(Self::ALL[(row + 1) * 3 + col]),
            _ => None,
        }
    }

    /// Orthogonal neighbours in move-generation order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// True iff `other` shares a row and is one column away, or shares a
    /// column and is one row away. Diagonals are never adjacent.
    pub fn is_adjacent_to(self, other: Position) -> bool {
        (self.row() == other.row() && self.col().abs_diff(other.col()) == 1)
            || (self.col() == other.col() && self.row().abs_diff(other.row()) == 1)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses an index (`0`-`8`), a `row col` / `row,col` pair, or a label.
    ///
    /// Labels match case-insensitively and ignore `-`, `_` and spaces, so
    /// `top-left`, `TopLeft` and `top left` all name the same cell.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Result<Position, ParsePositionError> {
        let trimmed = s.trim();
        let reject = || ParsePositionError {
            input: s.to_string(),
        };

        if let Ok(num) = trimmed.parse::<usize>() {
            return Self::from_index(num).ok_or_else(reject);
        }

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Self::from_row_col(row, col).map_err(|_| reject());
        }

        let normalize = |text: &str| -> String {
            text.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect()
        };
        let wanted = normalize(trimmed);
        Self::ALL
            .into_iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(reject)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_or_number(s)
    }
}

/// Orthogonal adjacency test between two cells.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.is_adjacent_to(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_for_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::from_row_col(3, 0),
            Err(OutOfRange { row: 3, col: 0 })
        );
        assert!(Position::from_row_col(0, 7).is_err());
    }

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        assert!(is_adjacent(Position::Center, Position::TopCenter));
        assert!(is_adjacent(Position::Center, Position::MiddleLeft));
        assert!(!is_adjacent(Position::Center, Position::TopLeft));
        assert!(!is_adjacent(Position::TopLeft, Position::TopRight));
        assert!(!is_adjacent(Position::Center, Position::Center));
        // Index neighbours across a row boundary are not adjacent.
        assert!(!is_adjacent(Position::TopRight, Position::MiddleLeft));
    }

    #[test]
    fn test_corner_has_two_neighbors_center_has_four() {
        assert_eq!(Position::TopLeft.neighbors().count(), 2);
        assert_eq!(Position::TopCenter.neighbors().count(), 3);
        assert_eq!(Position::Center.neighbors().count(), 4);
    }

    #[test]
    fn test_neighbors_agree_with_adjacency() {
        for a in Position::ALL {
            for b in Position::ALL {
                assert_eq!(a.neighbors().any(|n| n == b), a.is_adjacent_to(b));
            }
        }
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!("4".parse::<Position>(), Ok(Position::Center));
        assert_eq!("2 1".parse::<Position>(), Ok(Position::BottomCenter));
        assert_eq!("0,2".parse::<Position>(), Ok(Position::TopRight));
        assert_eq!("top-left".parse::<Position>(), Ok(Position::TopLeft));
        assert_eq!("Middle Right".parse::<Position>(), Ok(Position::MiddleRight));
        assert!("9".parse::<Position>().is_err());
        assert!("3 3".parse::<Position>().is_err());
        assert!("corner".parse::<Position>().is_err());
    }
}
