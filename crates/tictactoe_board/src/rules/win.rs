//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Mark};
use tracing::instrument;

/// Three `(row, col)` cells that win when they hold the same mark.
pub type Line = [(usize, usize); 3];

/// Winning lines in evaluation order: rows top to bottom, columns left to
/// right, main diagonal, anti-diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the first completed line and its mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Coord; 3])> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(r, col)| board.cell(r, col).unwrap_or(Cell::Empty));
        match a {
            Cell::Marked(mark) if a == b && b == c => {
                Some((mark, line.map(|(r, col)| Coord::on_board(r, col))))
            }
            _ => None,
        }
    })
}

/// Returns `Some(mark)` if that mark has three in a line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
