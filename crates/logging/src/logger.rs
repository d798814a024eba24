//! crates/logging/src/logger.rs
//! The logger value: configuration plus one sink per standard stream.

use crate::config::LogConfig;
use logging_sink::{DataRangeError, HexDump, MessageSink, Severity, Stream};
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

/// Logger bound to the process's standard streams.
pub type StdLogger = Logger<Stdout, Stderr>;

/// Leveled logger writing program-prefixed lines to an output and a
/// diagnostic writer.
///
/// Output and verbose lines go to the output writer; warnings and errors go
/// to the diagnostic writer. Only verbose lines consult the threshold. Write
/// failures are ignored: the logger is the program's diagnostic channel and
/// has nowhere else to report them.
///
/// # Examples
///
/// ```
/// use logging::{LogConfig, Logger};
///
/// let config = LogConfig::new("beep").with_level(1);
/// let mut logger = Logger::new(config, Vec::new(), Vec::new());
///
/// logger.output(format_args!("playing {} tones", 2));
/// logger.verbose(format_args!("using console beep"));
/// logger.error(format_args!("no device"));
///
/// let (out, err) = logger.into_writers();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "beep: playing 2 tones\nbeep: verbose: using console beep\n"
/// );
/// assert_eq!(String::from_utf8(err).unwrap(), "beep: error: no device\n");
/// ```
#[derive(Debug)]
pub struct Logger<O, E> {
    config: LogConfig,
    stdout: MessageSink<O>,
    stderr: MessageSink<E>,
}

impl StdLogger {
    /// Creates a logger bound to standard output and standard error.
    #[must_use]
    pub fn stdio(config: LogConfig) -> Self {
        Self::new(config, io::stdout(), io::stderr())
    }
}

impl<O, E> Logger<O, E> {
    /// Creates a logger from a configuration and the two destination writers.
    #[must_use]
    pub fn new(config: LogConfig, stdout: O, stderr: E) -> Self {
        Self {
            config,
            stdout: MessageSink::new(stdout),
            stderr: MessageSink::new(stderr),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Replaces the active configuration.
    pub fn set_config(&mut self, config: LogConfig) {
        self.config = config;
    }

    /// Returns the verbosity threshold.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.config.level
    }

    /// Sets the verbosity threshold.
    pub fn set_level(&mut self, level: i32) {
        self.config.level = level;
    }

    /// Returns the program-name prefix.
    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.config.program_name
    }

    /// Sets the program-name prefix.
    pub fn set_program_name(&mut self, name: impl Into<String>) {
        self.config.program_name = name.into();
    }

    /// Consumes the logger and returns the output and diagnostic writers.
    #[must_use]
    pub fn into_writers(self) -> (O, E) {
        (self.stdout.into_inner(), self.stderr.into_inner())
    }
}

impl<O, E> Logger<O, E>
where
    O: Write,
    E: Write,
{
    /// Emits a line of the given severity, applying verbosity gating.
    pub fn log(&mut self, severity: Severity, message: fmt::Arguments<'_>) {
        if severity.is_gated() && !self.config.verbose_enabled() {
            return;
        }
        self.emit(severity, message);
    }

    fn emit(&mut self, severity: Severity, message: fmt::Arguments<'_>) {
        let program = self.config.program_name.as_str();
        let _ = match severity.stream() {
            Stream::Stdout => self.stdout.write_line(program, severity, message),
            Stream::Stderr => self.stderr.write_line(program, severity, message),
        };
    }

    /// Writes a standard line to the output writer.
    pub fn output(&mut self, message: fmt::Arguments<'_>) {
        self.log(Severity::Output, message);
    }

    /// Writes an error line to the diagnostic writer.
    pub fn error(&mut self, message: fmt::Arguments<'_>) {
        self.log(Severity::Error, message);
    }

    /// Writes a warning line to the diagnostic writer.
    pub fn warning(&mut self, message: fmt::Arguments<'_>) {
        self.log(Severity::Warning, message);
    }

    /// Writes a verbose line to the output writer when the threshold is positive.
    pub fn verbose(&mut self, message: fmt::Arguments<'_>) {
        self.log(Severity::Verbose, message);
    }

    /// Writes a verbose line only when the threshold is at least `min_level`.
    pub fn verbose_at(&mut self, min_level: i32, message: fmt::Arguments<'_>) {
        if self.config.enabled_at(min_level) {
            self.emit(Severity::Verbose, message);
        }
    }

    /// Dumps `size` bytes of `buffer` starting at `start` to the output writer.
    ///
    /// Offsets in the dump are relative to the start of `buffer`. A range that
    /// does not lie within `buffer` is rejected before anything is written.
    pub fn data(&mut self, buffer: &[u8], start: usize, size: usize) -> Result<(), DataRangeError> {
        let dump = HexDump::from_range(buffer, start, size)?;
        let _ = self.stdout.write_dump(&self.config.program_name, &dump);
        Ok(())
    }

    /// Flushes both writers, ignoring failures.
    pub fn flush(&mut self) {
        let _ = self.stdout.flush();
        let _ = self.stderr.flush();
    }
}
