//! Terminal display for greeting lines
//!
//! The renderer only produces text plus a [`ColorTag`]; sinks decide how a
//! line reaches the user. Greeting output goes to stdout so it can be piped.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::greeting::{ColorTag, GreetingLine};

/// Destination for rendered greeting lines
pub trait LineSink {
    /// Emit one line, in order
    fn emit(&mut self, line: &GreetingLine) -> io::Result<()>;
}

/// Emit every line to the sink in order, stopping at the first write error
pub fn emit_all<S: LineSink + ?Sized>(sink: &mut S, lines: &[GreetingLine]) -> io::Result<()> {
    lines.iter().try_for_each(|line| sink.emit(line))
}

/// Apply terminal styling for a tag.
///
/// Whether escape codes are actually produced is governed by the `colored`
/// crate's global control (`NO_COLOR`, `CLICOLOR_FORCE`, overrides).
fn styled(text: &str, color: ColorTag) -> ColoredString {
    match color {
        ColorTag::Default => text.normal(),
        ColorTag::Green => text.green(),
        ColorTag::Blue => text.blue(),
        ColorTag::Yellow => text.yellow(),
        ColorTag::Cyan => text.cyan(),
    }
}

/// Writes lines to a terminal-like stream, styled by color tag
pub struct TerminalSink<W: Write> {
    writer: W,
}

impl<W: Write> TerminalSink<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LineSink for TerminalSink<W> {
    fn emit(&mut self, line: &GreetingLine) -> io::Result<()> {
        writeln!(self.writer, "{}", styled(&line.text, line.color))
    }
}

/// Collects plain line text in memory
#[derive(Debug, Default)]
pub struct CaptureSink {
    /// Lines emitted so far, unstyled
    pub lines: Vec<String>,
}

impl LineSink for CaptureSink {
    fn emit(&mut self, line: &GreetingLine) -> io::Result<()> {
        self.lines.push(line.text.clone());
        Ok(())
    }
}
