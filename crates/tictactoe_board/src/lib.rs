//! Pure tic-tac-toe board and rules engine.
//!
//! The [`Board`] owns a 3x3 grid of [`Cell`]s, accepts mark placements and
//! evaluates the [`GameStatus`] on demand. It never enforces turn order or
//! refuses moves after a game has ended; that belongs to whoever drives it.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, GameStatus, Mark};
//!
//! let mut board = Board::new();
//! assert!(board.place_mark(0, 0, Mark::X));
//! assert!(!board.place_mark(0, 0, Mark::O));
//! assert_eq!(board.check_status(), GameStatus::Pending);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod rules;
mod types;

pub use board::Board;
pub use types::{Cell, Coord, GameStatus, Mark, OffBoard, SIZE};
