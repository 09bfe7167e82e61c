// crates/infra/src/terminal.rs
use std::io::{self, BufRead, StdinLock};

use filecmdr_ports::terminal::UserInput;
use filecmdr_shared_kernel::{IoError, Result};

/// Reads responses from a buffered stream, normally standard input.
pub struct BufferedInput<R> {
    reader: R,
}

impl BufferedInput<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> BufferedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

fn input_error(source: io::Error) -> IoError {
    IoError::Input { source }
}

impl<R: BufRead> UserInput for BufferedInput<R> {
    /// Takes the first byte of the next read and drops everything else the
    /// read buffered, so a trailing newline never reaches the next prompt.
    fn read_answer(&mut self) -> Result<Option<char>> {
        let buffered = self.reader.fill_buf().map_err(input_error)?;
        let Some(&first) = buffered.first() else {
            return Ok(None);
        };
        let len = buffered.len();
        self.reader.consume(len);
        Ok(Some(char::from(first)))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(input_error)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
