//! Strictly Morris - terminal front end
//!
//! Plays Three Men's Morris on stdin/stdout and analyzes positions with both
//! search engines.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::MorrisConfig;
use std::path::PathBuf;
use strictly_morris::{Board, Difficulty, Game, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_morris=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            players,
            difficulty,
            seed,
            config,
        } => run_play(players, difficulty, seed, config),
        Command::Analyze {
            board,
            depth,
            to_move,
        } => run_analyze(&board, depth, to_move.into()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    players: Option<u8>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    config: PathBuf,
) -> Result<()> {
    let config = MorrisConfig::from_file(&config)?.with_overrides(players, difficulty, seed);
    let mode = config.mode()?;

    let mut game = match config.seed() {
        Some(seed) => Game::seeded(mode, *seed),
        None => Game::new(mode),
    };
    info!(%mode, difficulty = %config.difficulty(), "Starting game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    terminal::run(&mut game, *config.difficulty(), stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Run both engines on a board given on the command line
#[instrument]
fn run_analyze(board: &str, depth: u32, to_move: Player) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{board}'"))?;
    analyze::analyze(board, depth, to_move, &mut std::io::stdout())?;
    Ok(())
}
