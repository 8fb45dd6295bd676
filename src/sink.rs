//! Destinations for the lines emitted by [Node::walk](crate::Node::walk).
//!
//! The tree only depends on [LineSink]. [WriterSink] forwards to anything implementing
//! [std::io::Write] (e.g., the console), [RecordingSink] keeps the lines in memory.

use crate::NullObjectError;
use itertools::Itertools;
use std::{
    fmt,
    io::{self, Write},
};

/// Receives one line of text per visited node.
pub trait LineSink {
    /// `line` comes without a terminator; the sink adds one if its destination needs it.
    fn write_line(&mut self, line: &str) -> Result<(), NullObjectError>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), NullObjectError> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Writes each line followed by `\n` to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), NullObjectError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Keeps all lines in memory, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> Result<(), NullObjectError> {
        self.lines.write_line(line)
    }
}

impl fmt::Display for RecordingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::<u8>::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), ["first", "second"]);
        assert_eq!(sink.to_string(), "first\nsecond");
        assert_eq!(sink.into_lines(), vec!["first".to_string(), "second".to_string()]);
    }
}
