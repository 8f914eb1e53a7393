//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| !c.is_empty())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
