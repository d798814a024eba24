#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the rendering primitives behind the `logging`
//! crate: severities and their stream routing, line-oriented sinks that prefix
//! every line with the program name, and a hex/ASCII dump renderer for raw
//! byte ranges.
//!
//! # Design
//!
//! The crate exposes [`MessageSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor. Each sink owns a scratch buffer that is
//! reused whenever a line is rendered, so a long-running program does not
//! allocate per message. Every rendered line ends with `\n`.
//!
//! Line layout:
//!
//! ```text
//! prog: message
//! prog: verbose: message
//! prog: warning: message
//! prog: error: message
//! prog: data: 00000000  41 42 43 44                                      |ABCD|
//! ```
//!
//! # Invariants
//!
//! - Every line starts with the program name followed by `": "`.
//! - A line (or a whole dump) reaches the writer through a single
//!   `write_all`, so writers shared behind a lock never see partial lines.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values from the underlying
//! writer. Range validation for dumps reports [`DataRangeError`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{HexDump, MessageSink, Severity};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write_line("beep", Severity::Output, format_args!("{} beeps", 3)).unwrap();
//! sink.write_dump("beep", &HexDump::from_range(b"\x41\x42\x43\x44", 0, 4).unwrap()).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.lines().all(|line| line.starts_with("beep: ")));
//! assert!(output.contains("41 42 43 44"));
//! ```
//!
//! # See also
//!
//! - `logging` crate for the process-wide logger and the `log_*!` macros.

mod hexdump;
mod severity;
mod sink;

pub use hexdump::{BYTES_PER_ROW, DataRangeError, HexDump, HexRow, HexRows, checked_range};
pub use severity::{Severity, Stream};
pub use sink::MessageSink;
