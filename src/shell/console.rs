//! Line-oriented console shared by the shells
//!
//! Owns the input source and the output sink of a session. End of input is
//! sticky: once `read_line` has returned `None` it keeps doing so.

use crate::types::ShellError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    exhausted: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            exhausted: false,
        }
    }

    /// Next trimmed input line, or `None` at end of input
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print `text` without a newline and read the answer
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn say(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
