//! Legal move generation.

use crate::action::Move;
use crate::phases::GamePhase;
use crate::types::{Board, Player};

/// All legal moves for `player` on `board`.
///
/// Placement phase: one placement per empty cell, in row-major order.
/// Movement phase: for each of `player`'s pieces in row-major order, one
/// slide per empty orthogonal neighbour (left, right, up, down). Diagonal
/// and non-adjacent cells are never targets, and no move lands on an
/// occupied cell or moves another player's piece.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    match GamePhase::of(board) {
        GamePhase::Placement => board
            .empty_cells()
            .map(|to| Move::place(player, to))
            .collect(),
        GamePhase::Movement => board
            .pieces_of(player)
            .flat_map(|from| {
                from.neighbors()
                    .filter(|to| board.is_empty(*to))
                    .map(move |to| Move::slide(player, from, to))
            })
            .collect(),
    }
}
