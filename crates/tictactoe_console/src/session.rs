//! One complete console session: greeting, setup, game, outcome.

use crate::config::GameConfig;
use crate::console::Console;
use crate::controller::TurnController;
use crate::error::ConsoleError;
use crate::input::LineSource;
use crate::setup::setup_players;
use std::io::Write;
use tictactoe_board::{Board, GameStatus};
use tracing::{info, instrument};

/// Runs a full session and returns the console along with the final status.
#[instrument(skip_all)]
pub fn play<I: LineSource, W: Write>(
    mut console: Console<I, W>,
    config: &GameConfig,
) -> Result<(Console<I, W>, GameStatus), ConsoleError> {
    console.say("Welcome to Tic-Tac-Toe!")?;
    let (first, second) = setup_players(&mut console, config)?;

    console.blank()?;
    console.say("Initializing Game Board....")?;
    let mut board = Board::new();
    console.blank()?;
    console.say("Game Started.\n=============")?;
    console.blank()?;
    console.say(&board)?;
    console.blank()?;
    console.say("Choose a position from available positions on the board (e.g., 0,1).")?;
    console.blank()?;

    let mut controller = TurnController::new(console);
    let status = controller.run_game(&first, &second, &mut board)?;
    controller.announce_outcome(&first, &second, status)?;
    info!(%status, "Session complete");
    Ok((controller.into_console(), status))
}
