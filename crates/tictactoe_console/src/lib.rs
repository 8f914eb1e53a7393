//! Two-player console tic-tac-toe.
//!
//! # Architecture
//!
//! - **Console**: prompts and prints over an injected [`LineSource`] and writer
//! - **Setup**: names and marks, from presets or prompts
//! - **TurnController**: validates typed moves and alternates turns
//! - **Session**: the full greeting-to-outcome flow the binary runs
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Console, GameConfig, ScriptedSource, session};
//! use tictactoe_board::GameStatus;
//!
//! let input = ScriptedSource::new(["Ada", "x", "Bob", "0,0", "1,0", "0,1", "1,1", "0,2"]);
//! let (_, status) = session::play(Console::new(input, Vec::new()), &GameConfig::default())?;
//! assert!(matches!(status, GameStatus::Won(_)));
//! # Ok::<(), tictactoe_console::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod controller;
mod error;
mod input;
mod moves;
mod player;
pub mod session;
mod setup;

pub use cli::Cli;
pub use config::GameConfig;
pub use console::Console;
pub use controller::TurnController;
pub use error::{ConfigError, ConsoleError};
pub use input::{LineSource, ReaderSource, ScriptedSource};
pub use moves::{MoveRejection, parse_move, validate_move};
pub use player::Player;
pub use setup::{SetupRejection, parse_mark, parse_name, setup_players};
