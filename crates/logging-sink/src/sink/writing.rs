use super::MessageSink;
use crate::hexdump::HexDump;
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Tag rendered in front of every hex dump row.
const DATA_TAG: &str = "data";

fn formatter_error(_: fmt::Error) -> io::Error {
    io::Error::other("formatter returned an error while rendering a log line")
}

impl<W> MessageSink<W>
where
    W: Write,
{
    fn push_prefix(&mut self, program: &str, tag: Option<&str>) {
        self.scratch.push_str(program);
        self.scratch.push_str(": ");
        if let Some(tag) = tag {
            self.scratch.push_str(tag);
            self.scratch.push_str(": ");
        }
    }

    fn flush_scratch(&mut self) -> io::Result<()> {
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes a single newline-terminated line.
    ///
    /// The line is rendered as `program: [tag: ]message`, where the tag comes
    /// from [`Severity::tag`]. The sink does not apply verbosity gating; that
    /// decision belongs to the caller.
    pub fn write_line(
        &mut self,
        program: &str,
        severity: Severity,
        message: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.scratch.clear();
        self.push_prefix(program, severity.tag());
        self.scratch.write_fmt(message).map_err(formatter_error)?;
        self.scratch.push('\n');
        self.flush_scratch()
    }

    /// Writes every row of `dump` as its own prefixed line.
    ///
    /// All rows are rendered before the writer is touched, so the dump reaches
    /// the writer as one contiguous block. An empty dump writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::{HexDump, MessageSink};
    ///
    /// let mut sink = MessageSink::new(Vec::new());
    /// sink.write_dump("beep", &HexDump::new(b"ABCD", 0))?;
    ///
    /// let output = String::from_utf8(sink.into_inner()).unwrap();
    /// assert!(output.starts_with("beep: data: 00000000  41 42 43 44"));
    /// assert!(output.ends_with("|ABCD|\n"));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_dump(&mut self, program: &str, dump: &HexDump<'_>) -> io::Result<()> {
        if dump.is_empty() {
            return Ok(());
        }

        self.scratch.clear();
        for row in dump.rows() {
            self.push_prefix(program, Some(DATA_TAG));
            writeln!(self.scratch, "{row}").map_err(formatter_error)?;
        }
        self.flush_scratch()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
