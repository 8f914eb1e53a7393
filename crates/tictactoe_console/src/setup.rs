//! Interactive player setup.

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::input::LineSource;
use crate::player::Player;
use derive_more::Display;
use std::io::Write;
use tictactoe_board::Mark;
use tracing::{debug, info, instrument};

/// Why a setup answer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupRejection {
    /// Mark was not a single `X` or `O`.
    #[display("Invalid mark. Please choose X or O.")]
    InvalidMark,
    /// Name was blank.
    #[display("Name cannot be empty.")]
    EmptyName,
}

/// Reads a mark: a single `X` or `O`, either case, surrounding spaces ignored.
#[instrument]
pub fn parse_mark(input: &str) -> Option<Mark> {
    input.trim().parse().ok()
}

/// Trims a name, refusing blank ones.
#[instrument]
pub fn parse_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Builds both players, prompting for anything `config` does not supply.
///
/// The second player always receives the mark the first did not choose.
#[instrument(skip(console))]
pub fn setup_players<I: LineSource, W: Write>(
    console: &mut Console<I, W>,
    config: &GameConfig,
) -> Result<(Player, Player), ConsoleError> {
    let name1 = resolve_name(console, "Please enter a name for Player 1: ", config.player1_name())?;
    let mark1 = match config.player1_mark().as_deref().and_then(parse_mark) {
        Some(mark) => mark,
        None => ask_mark(console, &name1)?,
    };
    let name2 = resolve_name(console, "Please enter a name for Player 2: ", config.player2_name())?;

    let first = Player::new(name1, mark1);
    let second = Player::new(name2, mark1.opponent());
    console.say(format!("{} uses {}", first.name(), first.mark()))?;
    console.say(format!("{} uses {}", second.name(), second.mark()))?;
    info!(%first, %second, "Players ready");
    Ok((first, second))
}

fn resolve_name<I: LineSource, W: Write>(
    console: &mut Console<I, W>,
    prompt: &str,
    preset: &Option<String>,
) -> Result<String, ConsoleError> {
    if let Some(name) = preset.as_deref().and_then(parse_name) {
        return Ok(name);
    }
    loop {
        let line = console.prompt(prompt)?;
        match parse_name(&line) {
            Some(name) => return Ok(name),
            None => {
                debug!("Empty name rejected");
                console.say(SetupRejection::EmptyName)?;
            }
        }
    }
}

fn ask_mark<I: LineSource, W: Write>(
    console: &mut Console<I, W>,
    name: &str,
) -> Result<Mark, ConsoleError> {
    let prompt = format!("Please choose a mark between X and O for {}: ", name);
    loop {
        let line = console.prompt(&prompt)?;
        match parse_mark(&line) {
            Some(mark) => return Ok(mark),
            None => {
                debug!(input = %line, "Mark rejected");
                console.say(SetupRejection::InvalidMark)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark("o"), Some(Mark::O));
        assert_eq!(parse_mark("X"), Some(Mark::X));
        assert_eq!(parse_mark(" x "), Some(Mark::X));
        assert_eq!(parse_mark("xo"), None);
        assert_eq!(parse_mark("OX"), None);
        assert_eq!(parse_mark("Z"), None);
        assert_eq!(parse_mark(""), None);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Ada "), Some("Ada".to_string()));
        assert_eq!(parse_name("   "), None);
        assert_eq!(parse_name(""), None);
    }
}
