//! Optional player presets loaded from TOML and the command line.

use crate::error::ConfigError;
use crate::setup::{parse_mark, parse_name};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presets that let setup skip prompts.
///
/// Every field is optional; anything missing is asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name for the first player.
    #[serde(default)]
    player1_name: Option<String>,

    /// Name for the second player.
    #[serde(default)]
    player2_name: Option<String>,

    /// Mark for the first player, `X` or `O` in either case.
    #[serde(default)]
    player1_mark: Option<String>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces fields with any values given explicitly.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        player1_name: Option<String>,
        player2_name: Option<String>,
        player1_mark: Option<String>,
    ) -> Self {
        Self {
            player1_name: player1_name.or(self.player1_name),
            player2_name: player2_name.or(self.player2_name),
            player1_mark: player1_mark.or(self.player1_mark),
        }
    }

    /// Checks preset values with the same rules interactive setup uses.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("player1_name", &self.player1_name),
            ("player2_name", &self.player2_name),
        ] {
            if let Some(name) = name
                && parse_name(name).is_none()
            {
                return Err(ConfigError::new(format!("{} must not be empty", key)));
            }
        }
        if let Some(mark) = &self.player1_mark
            && parse_mark(mark).is_none()
        {
            return Err(ConfigError::new(format!(
                "player1_mark must be X or O, got {:?}",
                mark
            )));
        }
        Ok(())
    }
}
