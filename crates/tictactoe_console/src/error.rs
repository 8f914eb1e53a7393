//! Error types for the console game.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure talking to the terminal.
///
/// Bad moves and bad marks are not errors; they are reported to the
/// player and re-prompted. This covers the streams themselves.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// The input stream ended before the game did.
    #[display("Input closed before the game finished")]
    InputClosed,
    /// Reading or writing the terminal failed.
    #[display("Console I/O error: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}
