use anyhow::*;
use std::io::{self, BufRead};

#[cfg(test)]
pub mod mock;

/// A line-based interactive input stream.
///
/// Reads may block for as long as the user takes to type, and cannot be
/// interrupted. Implementations are shared with background reader threads.
pub trait AnswerInput: Send + Sync + 'static {
    /// Returns the next line without its terminator, or `None` once the stream is closed.
    fn read_line(&self) -> Result<Option<String>>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StdinInput;

impl AnswerInput for StdinInput {
    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Could not read from stdin")?;
        if bytes_read == 0 {
            return Ok(None);
        }
        let line_end = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(line_end);
        Ok(Some(line))
    }
}
