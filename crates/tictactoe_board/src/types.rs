//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Mark a player places on the board.
///
/// Parsing is case-insensitive and accepts only the single letters
/// `X` and `O`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate with both components in `0..3`.
///
/// Deserialization goes through [`Coord::new`], so an off-board pair is
/// rejected rather than constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "RawCoord")]
#[display("{},{}", row, col)]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: i64,
    col: i64,
}

/// A coordinate pair that falls off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Coordinate {},{} is off the board", row, col)]
pub struct OffBoard {
    /// Requested row.
    pub row: i64,
    /// Requested column.
    pub col: i64,
}

impl TryFrom<RawCoord> for Coord {
    type Error = OffBoard;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col).ok_or(OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Coord {
    /// Creates a coordinate, or `None` when either component is off the board.
    ///
    /// Accepts signed input so that user-typed values like `-1` can be
    /// classified as out of range rather than unparseable.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < SIZE)?;
        Some(Self { row, col })
    }

    /// Builds a coordinate from indices already known to be on the board.
    pub(crate) const fn on_board(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Status of a game as last evaluated by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game still in progress.
    #[default]
    #[display("Pending")]
    Pending,
    /// A line was completed by this mark.
    #[display("Won by {}", _0)]
    Won(Mark),
    /// Board full with no completed line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Pending)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::Pending | GameStatus::Draw => None,
        }
    }
}
