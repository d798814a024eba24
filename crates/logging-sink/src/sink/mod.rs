use std::fmt;

mod writing;


/// Streaming sink that renders program-prefixed log lines into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each line is rendered into the scratch buffer first and handed to
/// the writer with a single `write_all`, so a sink shared behind a lock never
/// interleaves partial lines. The scratch allocation is retained between
/// writes.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::{MessageSink, Severity};
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write_line("beep", Severity::Warning, format_args!("no console found"))?;
/// sink.write_line("beep", Severity::Error, format_args!("cannot open {}", "/dev/tty0"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "beep: warning: no console found\nbeep: error: cannot open /dev/tty0\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: String,
}

impl<W> MessageSink<W> {
    /// Creates a new sink; every rendered line ends with `\n`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
