//! End-to-end console sessions.

use tictactoe_board::{GameStatus, Mark};
use tictactoe_console::{Console, GameConfig, ReaderSource, session};

#[test]
fn test_full_session_transcript() {
    let input = "Ada\nx\nBob\n0,0\n1,0\n0,1\n1,1\n0,2\n";
    let console = Console::new(ReaderSource::new(input.as_bytes()), Vec::new());

    let (console, status) = session::play(console, &GameConfig::default()).unwrap();
    assert_eq!(status, GameStatus::Won(Mark::X));

    let (_, out) = console.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Welcome to Tic-Tac-Toe!\n"));
    assert!(out.contains("Ada uses X\nBob uses O\n"));
    assert!(out.contains("Initializing Game Board....\n"));
    assert!(out.contains("Game Started.\n=============\n"));
    assert!(out.contains("    0,0 | 0,1 | 0,2\n    ----------------\n"));
    assert!(out.contains("Choose a position from available positions on the board (e.g., 0,1).\n"));
    assert!(out.contains("     X  |  X  |  X \n"));
    assert!(out.ends_with("Congratulations! Ada is the winner.\n"));
}

#[test]
fn test_session_with_presets_and_draw() {
    let config = GameConfig::default().with_overrides(
        Some("Ada".to_string()),
        Some("Bob".to_string()),
        Some("O".to_string()),
    );
    let input = "0,0\n0,1\n0,2\n1,2\n1,0\n2,0\n1,1\n2,2\n2,1\n";
    let console = Console::new(ReaderSource::new(input.as_bytes()), Vec::new());

    let (console, status) = session::play(console, &config).unwrap();
    assert_eq!(status, GameStatus::Draw);
    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.contains("Ada's turn (O):"));
    assert!(out.ends_with("Game ended in a draw.\n"));
}

#[test]
fn test_session_ends_with_error_on_eof() {
    let console = Console::new(ReaderSource::new("Ada\nx\nBob\n0,0\n".as_bytes()), Vec::new());
    assert!(session::play(console, &GameConfig::default()).is_err());
}
