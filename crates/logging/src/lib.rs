#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small process-wide logger for command-line programs. It
//! emits human-readable lines at four severities, dumps raw byte ranges for
//! diagnostics, and prefixes everything with the program's name:
//!
//! ```text
//! myprog: 3 files processed
//! myprog: verbose: opened /dev/console
//! myprog: warning: falling back to stdout
//! myprog: error: cannot open /dev/tty0
//! myprog: data: 00000000  41 42 43 44                                      |ABCD|
//! ```
//!
//! # Design
//!
//! Two values drive every call: the verbosity threshold and the program-name
//! prefix, together a [`LogConfig`]. [`Logger`] pairs a configuration with an
//! output and a diagnostic writer, and is the type to use when the caller
//! wants to own the destinations (tests, embedding). The free functions
//! ([`init`], [`output`], [`verbose`], [`data`], ...) and the `log_*!` macros
//! operate on a lazily-created process-wide [`StdLogger`] bound to standard
//! output and standard error.
//!
//! Routing:
//!
//! - output and verbose lines go to standard output;
//! - warnings and errors go to standard error;
//! - hex dumps go to standard output;
//! - only verbose lines consult the threshold, and only when it is positive.
//!
//! # Invariants
//!
//! - Every line begins with the current program name followed by `": "`.
//! - Each line is written with a single `write_all` under the logger's lock,
//!   so concurrent callers never interleave within a line.
//! - The program name defaults to [`DEFAULT_PROGRAM_NAME`] until [`init`] or
//!   [`set_program_name`] runs.
//!
//! # Errors
//!
//! Write failures are ignored. Precondition violations are reported as
//! values: [`InitError`] when `argv[0]` yields no program name and
//! [`DataRangeError`] when a dump range falls outside its buffer.
//!
//! # Examples
//!
//! ```
//! use logging::{log_error, log_output, log_verbose};
//!
//! logging::init(["/usr/local/bin/myprog", "-v"])?;
//! logging::set_level(1);
//!
//! log_output!("{} files processed", 3);
//! log_verbose!("opened {}", "/dev/console");
//! log_error!("cannot open {}", "/dev/tty0");
//! logging::data(b"ABCD", 0, 4)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `tracing`: [`LoggerLayer`] routes `tracing` events into the process-wide
//!   logger, or into any [`RouteTarget`].
//! - `serde`: `Serialize`/`Deserialize` for [`LogConfig`].

mod config;
mod error;
mod global;
mod logger;
mod macros;
mod progname;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{DEFAULT_PROGRAM_NAME, LogConfig};
pub use error::InitError;
pub use global::{
    config, configure, data, error, flush, init, level, log, output, program_name, set_level,
    set_program_name, verbose, verbose_at, verbose_enabled, warning,
};
pub use logger::{Logger, StdLogger};
pub use logging_sink::{DataRangeError, Severity, Stream};
pub use progname::{program_name_from_args, program_name_from_path};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    LoggerLayer, ProcessLogger, Route, RouteTarget, init_tracing, init_tracing_with_filter,
};
