//! Output formatting for the front-ends.
//!
//! Results are printed as 2-space indented JSON with non-ASCII characters
//! kept as-is. Raw-text responses are printed verbatim.

use std::io::{self, Write};

use console::style;
use serde::Serialize;

use crate::clients::ResponseBody;

/// Width of section dividers.
const DIVIDER_WIDTH: usize = 60;

/// Output handler writing results to any [`Write`] sink.
#[derive(Debug)]
pub struct Output<W: Write = io::Stdout> {
    out: W,
}

impl Output<io::Stdout> {
    /// Creates an output handler on stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output<W> {
    /// Creates an output handler on the given sink.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a response body.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn body(&mut self, body: &ResponseBody) -> io::Result<()> {
        writeln!(self.out, "{}", body.pretty())
    }

    /// Prints any serializable value as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the value cannot be serialized or the sink
    /// cannot be written.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.out, "{json}")
    }

    /// Prints a plain line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    /// Prints a success line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{} {msg}", style("✓").green())
    }

    /// Prints an error line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", style("✗").red(), style(msg).red())
    }

    /// Prints a section divider with an optional title.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn divider(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(DIVIDER_WIDTH))?;
        if !title.is_empty() {
            writeln!(self.out, "{}", style(title).bold())?;
            writeln!(self.out, "{}", "-".repeat(DIVIDER_WIDTH))?;
        }
        Ok(())
    }

    /// Prints a key-value pair.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be written.
    pub fn kv(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "  {}: {value}", style(key).dim())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sink cannot be flushed.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
