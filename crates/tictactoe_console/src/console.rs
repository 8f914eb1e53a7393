//! Prompt-and-print wrapper around an input source and an output stream.

use crate::error::ConsoleError;
use crate::input::LineSource;
use std::fmt::Display;
use std::io::Write;
use tracing::{instrument, warn};

/// Terminal the game talks through.
#[derive(Debug)]
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: LineSource, W: Write> Console<I, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `text` without a newline and reads the reply.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        match self.input.read_line()? {
            Some(line) => Ok(line),
            None => {
                warn!("Input closed while waiting for a reply");
                Err(ConsoleError::InputClosed)
            }
        }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Returns the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Splits the console back into its input and output.
    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }
}
