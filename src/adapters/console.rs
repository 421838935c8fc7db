use crate::core::prompted::parse_number;
use crate::domain::ports::NumberSource;
use crate::utils::error::{DrillError, Result};
use std::io::{self, BufRead, Write};

/// Prompts on a writer and reads one answer per line from a reader.
pub struct ConsoleSource<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl ConsoleSource<io::StdinLock<'static>, io::Stderr> {
    /// Reads answers from stdin and prompts on stderr, leaving stdout to the
    /// exercise output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> NumberSource for ConsoleSource<R, W> {
    fn read_number(&mut self, prompt: &str) -> Result<i64> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(DrillError::invalid_input("", "no input provided"));
        }
        parse_number(&line)
    }
}
