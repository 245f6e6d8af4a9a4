//! Game rules for Three Men's Morris.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the state machine, the evaluator and the tests all read
//! the same definitions.

pub mod threat;
pub mod win;

pub use threat::has_open_pair;
pub use win::{LINES, WIN_CHECK_MIN_PIECES, has_winner, winner};
