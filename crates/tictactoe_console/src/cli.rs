//! Command-line interface for the console game.

use crate::config::GameConfig;
use crate::error::ConfigError;
use clap::Parser;
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with player presets
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Name for Player 1 (skips the prompt)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name for Player 2 (skips the prompt)
    #[arg(long)]
    pub player2: Option<String>,

    /// Mark for Player 1, X or O (skips the prompt)
    #[arg(short, long)]
    pub mark: Option<String>,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let config = base.with_overrides(
            self.player1.clone(),
            self.player2.clone(),
            self.mark.clone(),
        );
        config.validate()?;
        Ok(config)
    }
}
