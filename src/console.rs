//! Interactive numeric prompts

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt for the previous day's close
pub const PREVIOUS_CLOSE_PROMPT: &str = "Enter the previous day's closing price: ";
/// Prompt for the 5-day moving average
pub const MOVING_AVERAGE_PROMPT: &str = "Enter the 5-day moving average: ";

/// Reads numbers from a line-oriented input, echoing prompts to an output
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt`, read one line and parse it as `f64`.
    ///
    /// Surrounding whitespace is ignored. There is no re-prompt: empty
    /// input, end of input or non-numeric text is an error.
    pub fn read_f64(&mut self, prompt: &str) -> Result<f64> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context(format!("Failed to read input for '{}'", prompt.trim_end()))?;
        if read == 0 {
            anyhow::bail!("No input for '{}'", prompt.trim_end());
        }

        let text = line.trim();
        text.parse::<f64>()
            .context(format!("Invalid number for '{}': {:?}", prompt.trim_end(), text))
    }

    /// Write a full line to the output
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
