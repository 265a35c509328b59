//! Output sink for help and version text.

use std::io::{self, Write};

/// Destination for the lines the parser writes.
///
/// Anything implementing [`std::io::Write`] is a sink, so both `Stdout` and an
/// in-memory `Vec<u8>` can be handed to the parser.
pub trait OutputSink {
    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write> OutputSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")
    }
}
