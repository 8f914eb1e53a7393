//! Turn-by-turn game loop between two players.

use crate::console::Console;
use crate::error::ConsoleError;
use crate::input::LineSource;
use crate::moves::validate_move;
use crate::player::Player;
use std::io::Write;
use tictactoe_board::{Board, Coord, GameStatus};
use tracing::{debug, info, instrument};

/// Drives a game by asking each player for moves in turn.
#[derive(Debug)]
pub struct TurnController<I, W> {
    console: Console<I, W>,
}

impl<I: LineSource, W: Write> TurnController<I, W> {
    /// Creates a controller that talks through `console`.
    pub fn new(console: Console<I, W>) -> Self {
        Self { console }
    }

    /// Returns the console.
    pub fn console(&self) -> &Console<I, W> {
        &self.console
    }

    /// Gives back the console.
    pub fn into_console(self) -> Console<I, W> {
        self.console
    }

    /// Asks `player` for a move until a valid one arrives, then places it.
    ///
    /// Each refused line is answered with its rejection message. There is
    /// no retry limit.
    #[instrument(skip(self, board), fields(player = %player.name(), mark = %player.mark()))]
    pub fn request_move(&mut self, player: &Player, board: &mut Board) -> Result<Coord, ConsoleError> {
        loop {
            let line = self.console.prompt(&format!("{}: ", player.name()))?;
            let coord = match validate_move(&line, board) {
                Ok(coord) => coord,
                Err(rejection) => {
                    debug!(input = %line, ?rejection, "Move rejected");
                    self.console.say(rejection)?;
                    continue;
                }
            };
            if board.place_mark(coord.row(), coord.col(), *player.mark()) {
                debug!(%coord, "Move placed");
                return Ok(coord);
            }
        }
    }

    /// Plays alternating turns, starting with `first`, until the board
    /// reports a win or draw.
    ///
    /// The board is re-evaluated after every placement and is not touched
    /// again once the status is terminal.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn run_game(
        &mut self,
        first: &Player,
        second: &Player,
        board: &mut Board,
    ) -> Result<GameStatus, ConsoleError> {
        info!("Game started");
        let players = [first, second];
        let mut status = board.check_status();
        let mut turn = 0;
        while !status.is_terminal() {
            let current = players[turn % 2];
            self.console
                .say(format!("{}'s turn ({}):", current.name(), current.mark()))?;
            self.request_move(current, board)?;

            self.console.blank()?;
            self.console.say(&*board)?;
            self.console.blank()?;

            status = board.check_status();
            turn += 1;
        }
        info!(%status, "Game finished");
        Ok(status)
    }

    /// Prints the winner's name or the draw message for a terminal status.
    #[instrument(skip(self, first, second))]
    pub fn announce_outcome(
        &mut self,
        first: &Player,
        second: &Player,
        status: GameStatus,
    ) -> Result<(), ConsoleError> {
        match status {
            GameStatus::Won(mark) => {
                let winner = if *first.mark() == mark { first } else { second };
                self.console
                    .say(format!("Congratulations! {} is the winner.", winner.name()))
            }
            GameStatus::Draw => self.console.say("Game ended in a draw."),
            GameStatus::Pending => Ok(()),
        }
    }
}
