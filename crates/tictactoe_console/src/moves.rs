//! Parsing and validation of typed `row,col` moves.

use derive_more::Display;
use tictactoe_board::{Board, Coord};
use tracing::instrument;

/// Why a typed move was refused.
///
/// The display text is what the player sees before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// Input did not split into exactly two comma-separated parts.
    #[display("Invalid format. Please use row,col (e.g., 0,1).")]
    WrongFormat,
    /// A part was not an integer.
    #[display("Invalid format. Please enter numbers for row and column (e.g., 0,1).")]
    NotNumeric,
    /// Row or column outside 0..=2.
    #[display("Invalid position. Row and column must be between 0 and 2.")]
    OutOfRange,
    /// Target cell already holds a mark.
    #[display("Cell already occupied. Choose an empty cell.")]
    Occupied,
}

/// Splits `row,col` into two integers.
///
/// Whitespace around each part is ignored. Range is not checked here.
#[instrument]
pub fn parse_move(line: &str) -> Result<(i64, i64), MoveRejection> {
    let parts: Vec<&str> = line.split(',').collect();
    let [row, col] = parts.as_slice() else {
        return Err(MoveRejection::WrongFormat);
    };
    let row = row.trim().parse::<i64>().map_err(|_| MoveRejection::NotNumeric)?;
    let col = col.trim().parse::<i64>().map_err(|_| MoveRejection::NotNumeric)?;
    Ok((row, col))
}

/// Turns a typed move into a free coordinate on `board`.
#[instrument(skip(board))]
pub fn validate_move(line: &str, board: &Board) -> Result<Coord, MoveRejection> {
    let (row, col) = parse_move(line)?;
    let coord = Coord::new(row, col).ok_or(MoveRejection::OutOfRange)?;
    if !board.is_cell_empty(coord.row(), coord.col()) {
        return Err(MoveRejection::Occupied);
    }
    Ok(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::Mark;

    #[test]
    fn test_parse_plain_and_padded() {
        assert_eq!(parse_move("0,1"), Ok((0, 1)));
        assert_eq!(parse_move(" 2 ,  0 "), Ok((2, 0)));
        assert_eq!(parse_move("-1,7"), Ok((-1, 7)));
    }

    #[test]
    fn test_wrong_part_count() {
        assert_eq!(parse_move("1"), Err(MoveRejection::WrongFormat));
        assert_eq!(parse_move(""), Err(MoveRejection::WrongFormat));
        assert_eq!(parse_move("1,2,3"), Err(MoveRejection::WrongFormat));
        assert_eq!(parse_move("1 2"), Err(MoveRejection::WrongFormat));
    }

    #[test]
    fn test_non_numeric_parts() {
        assert_eq!(parse_move("invalid,input"), Err(MoveRejection::NotNumeric));
        assert_eq!(parse_move("1,"), Err(MoveRejection::NotNumeric));
        assert_eq!(parse_move("1.5,0"), Err(MoveRejection::NotNumeric));
    }

    #[test]
    fn test_validate_range_and_occupancy() {
        let mut board = Board::new();
        board.place_mark(1, 1, Mark::X);
        assert_eq!(validate_move("-1,0", &board), Err(MoveRejection::OutOfRange));
        assert_eq!(validate_move("3,3", &board), Err(MoveRejection::OutOfRange));
        assert_eq!(validate_move("1,1", &board), Err(MoveRejection::Occupied));
        assert_eq!(validate_move("0,2", &board), Ok(Coord::new(0, 2).unwrap()));
    }

    #[test]
    fn test_rejection_messages_are_distinct() {
        let all = [
            MoveRejection::WrongFormat,
            MoveRejection::NotNumeric,
            MoveRejection::OutOfRange,
            MoveRejection::Occupied,
        ];
        let texts: std::collections::HashSet<String> = all.iter().map(ToString::to_string).collect();
        assert_eq!(texts.len(), all.len());
    }
}
