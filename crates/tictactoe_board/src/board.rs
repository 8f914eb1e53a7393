//! The 3x3 board and its placement and status operations.

use crate::rules;
use crate::types::{Cell, GameStatus, Mark, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Owns the cell grid and remembers the status computed by the last
/// call to [`Board::check_status`]. Cells only ever move from
/// [`Cell::Empty`] to [`Cell::Marked`].
///
/// Only the cells are serialized. A deserialized board starts `Pending`
/// until it is checked again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
    /// Result of the last status evaluation.
    #[serde(skip)]
    status: GameStatus,
}

impl Board {
    /// Creates a new empty board with a pending status.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the whole grid.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Checks whether `(row, col)` is on the board and unmarked.
    ///
    /// Off-board coordinates report `false`, so a caller that skips its own
    /// bounds check still sees the cell as unavailable.
    #[instrument(skip(self))]
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `false` without touching the board when the coordinate is
    /// off the board or the cell is already marked.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_cell_empty(row, col) {
            debug!("Placement rejected");
            return false;
        }
        self.cells[row][col] = Cell::Marked(mark);
        debug!("Mark placed");
        true
    }

    /// Evaluates the board and stores the result.
    ///
    /// Lines are scanned in canonical order and the first completed line
    /// wins. A full board with no completed line is a draw.
    #[instrument(skip(self))]
    pub fn check_status(&mut self) -> GameStatus {
        let status = if let Some(mark) = rules::check_winner(self) {
            GameStatus::Won(mark)
        } else if rules::is_draw(self) {
            GameStatus::Draw
        } else {
            GameStatus::Pending
        };
        debug!(%status, "Status evaluated");
        self.status = status;
        status
    }

    /// Returns the status stored by the last [`Board::check_status`] call.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning mark from the last status evaluation.
    ///
    /// Does not re-evaluate the board.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows indented by four spaces. Empty cells show their own
    /// `row,col` so players can read off valid input.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "    {}", "-".repeat(16))?;
            }
            write!(f, "    ")?;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " | ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{},{}", row, col)?,
                    Cell::Marked(mark) => write!(f, " {} ", mark)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_is_empty() {
        let board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.is_cell_empty(row, col));
            }
        }
        assert_eq!(board.status(), GameStatus::Pending);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_cell_empty(3, 0));
        assert!(!board.is_cell_empty(0, 3));
        assert!(!board.is_cell_empty(usize::MAX, 1));
    }

    #[test]
    fn test_place_mark_occupies_cell() {
        let mut board = Board::new();
        assert!(board.place_mark(1, 2, Mark::O));
        assert!(!board.is_cell_empty(1, 2));
        assert_eq!(board.cell(1, 2), Some(Cell::Marked(Mark::O)));
    }

    #[test]
    fn test_place_mark_rejects_occupied_without_mutation() {
        let mut board = Board::new();
        assert!(board.place_mark(0, 0, Mark::X));
        let before = board.clone();
        assert!(!board.place_mark(0, 0, Mark::O));
        assert!(!board.place_mark(0, 0, Mark::O));
        assert_eq!(board, before);
        assert_eq!(board.cell(0, 0), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_place_mark_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.place_mark(3, 3, Mark::X));
        assert!(!board.place_mark(0, 5, Mark::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_winner_is_cached_until_rechecked() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::X);
        board.place_mark(0, 1, Mark::X);
        board.place_mark(0, 2, Mark::X);
        assert_eq!(board.winner(), None);
        assert_eq!(board.check_status(), GameStatus::Won(Mark::X));
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_display_shows_coordinates_and_marks() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::X);
        board.place_mark(1, 1, Mark::O);
        let expected = [
            "     X  | 0,1 | 0,2",
            "    ----------------",
            "    1,0 |  O  | 1,2",
            "    ----------------",
            "    2,0 | 2,1 | 2,2",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_board_serializes() {
        let mut board = Board::new();
        board.place_mark(1, 1, Mark::X);
        board.check_status();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialized_board_is_rechecked() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place_mark(0, col, Mark::O);
        }
        assert_eq!(board.check_status(), GameStatus::Won(Mark::O));

        let json = serde_json::to_string(&board).unwrap();
        assert!(!json.contains("status"));
        let mut back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status(), GameStatus::Pending);
        assert_eq!(back.check_status(), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_stored_status_is_not_trusted() {
        let mut value = serde_json::to_value(Board::new()).unwrap();
        value["status"] = serde_json::json!({ "Won": "X" });
        let board: Board = serde_json::from_value(value).unwrap();
        assert_eq!(board.status(), GameStatus::Pending);
        assert_eq!(board.winner(), None);
    }
}
