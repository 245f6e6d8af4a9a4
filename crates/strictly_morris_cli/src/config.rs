//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_morris::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MorrisConfig {
    /// Number of human players, 1 or 2.
    #[serde(default = "default_players")]
    players: u8,

    /// Computer strength in one-player games.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for the computer's randomness; drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_players() -> u8 {
    1
}

impl Default for MorrisConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl MorrisConfig {
    /// Loads configuration from a TOML file. A missing file yields defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players = config.players, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Applies command-line values over the file values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        players: Option<u8>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(players) = players {
            self.players = players;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Game mode for the configured player count.
    pub fn mode(&self) -> Result<GameMode, ConfigError> {
        GameMode::from_player_count(self.players).ok_or_else(|| {
            ConfigError::new(format!(
                "players must be 1 or 2, got {}",
                self.players
            ))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
