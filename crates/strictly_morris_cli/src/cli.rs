//! Command-line interface for the morris binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_morris::{Difficulty, HARD_DEPTH_MAX, Player};

/// Strictly Morris - Three Men's Morris in the terminal
#[derive(Parser, Debug)]
#[command(name = "morris")]
#[command(about = "Three Men's Morris against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Number of human players (1 plays against the computer)
        #[arg(short, long)]
        players: Option<u8>,

        /// Computer strength: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "morris.toml")]
        config: PathBuf,
    },

    /// Run both search engines on a board and compare them
    Analyze {
        /// Board as nine cells of A, B or '.', rows optionally split by '/'
        board: String,

        /// Search depth in plies
        #[arg(long, default_value_t = HARD_DEPTH_MAX)]
        depth: u32,

        /// Side to search for (B maximizes, A minimizes)
        #[arg(long, value_enum, default_value_t = Side::B)]
        to_move: Side,
    },
}

/// A player as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Player A, the minimizing side
    A,
    /// Player B, the maximizing side
    B,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::A => Player::A,
            Side::B => Player::B,
        }
    }
}
