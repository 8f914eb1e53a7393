//! Line-oriented input sources.
//!
//! The game never touches stdin directly. Whatever drives it hands over a
//! [`LineSource`], so tests can script a whole game.

use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{instrument, trace};

/// Supplies one line of player input at a time.
pub trait LineSource {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the source is exhausted. Blocks until a line
    /// is available.
    fn read_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, typically standard input.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<std::io::StdinLock<'static>> {
    /// Locks process standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            trace!("Reader exhausted");
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    /// Creates a source that yields `lines` in order.
    pub fn new<L>(lines: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
