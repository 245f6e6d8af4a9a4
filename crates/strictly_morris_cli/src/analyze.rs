//! Side-by-side report from both search engines on a typed board.

use std::io::Write;
use strictly_morris::{
    Board, GameMode, GameState, Player, SearchResult, alpha_beta, evaluate, minimax,
};
use tracing::{info, instrument};

/// Searches `board` for `to_move` with both engines and prints the results.
#[instrument(skip(board, output), fields(pieces = board.piece_count()))]
pub fn analyze<W: Write>(
    board: Board,
    depth: u32,
    to_move: Player,
    output: &mut W,
) -> std::io::Result<()> {
    let state = GameState::from_board(board, to_move, GameMode::OnePlayer);
    let maximizing = to_move == Player::B;

    writeln!(output, "{board}")?;
    writeln!(
        output,
        "phase: {}, to move: {to_move}, static score: {}",
        state.phase(),
        evaluate(&board)
    )?;

    let plain = minimax(&state, depth, maximizing);
    let pruned = alpha_beta(&state, depth, maximizing);
    report(output, "minimax", depth, &plain)?;
    report(output, "alpha-beta", depth, &pruned)?;

    if plain.best_move != pruned.best_move || plain.score != pruned.score {
        writeln!(output, "engines disagree")?;
    }
    info!(
        minimax_nodes = plain.nodes,
        alpha_beta_nodes = pruned.nodes,
        "Analysis complete"
    );
    Ok(())
}

fn report<W: Write>(
    output: &mut W,
    engine: &str,
    depth: u32,
    result: &SearchResult,
) -> std::io::Result<()> {
    let best = match result.best_move {
        Some(mv) => mv.to_string(),
        None => "no move".to_string(),
    };
    writeln!(
        output,
        "{engine:>10} depth {depth}: {best}, score {}, {} nodes",
        result.score, result.nodes
    )
}
