//! Participants in a game.

use derive_getters::Getters;
use derive_new::new;
use tictactoe_board::Mark;

/// A named participant holding one mark for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name, never empty.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
