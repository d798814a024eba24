//! crates/logging/src/global.rs
//! Process-wide logger bound to standard output and standard error.
//!
//! The logger is created lazily with [`LogConfig::default`] and lives for the
//! rest of the process. The expected lifecycle is one writer at startup
//! ([`init`], [`set_level`], [`configure`]) followed by any number of logging
//! calls from any thread. Every call holds the logger's lock for the duration
//! of a single line, so lines from concurrent callers never interleave.
//!
//! Message arguments are rendered into an owned string before the lock is
//! taken, so a `Display` implementation may itself log. Its line is written
//! before the line that is being formatted.

use crate::config::LogConfig;
use crate::error::InitError;
use crate::logger::StdLogger;
use crate::progname::program_name_from_args;
use logging_sink::{DataRangeError, Severity};
use std::ffi::OsString;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

static LOGGER: OnceLock<Mutex<StdLogger>> = OnceLock::new();

fn with_logger<R>(f: impl FnOnce(&mut StdLogger) -> R) -> R {
    let logger = LOGGER.get_or_init(|| Mutex::new(StdLogger::stdio(LogConfig::default())));
    let mut guard = logger.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

// Formatting runs user `Display` code, which must not see the lock held.
fn emit(severity: Severity, message: fmt::Arguments<'_>) {
    let text = fmt::format(message);
    with_logger(|logger| logger.log(severity, format_args!("{text}")));
}

/// Sets the program-name prefix from the non-directory part of `args[0]`.
///
/// Call once at the start of `main`, typically with
/// [`std::env::args_os`]. On error the prefix is left unchanged.
///
/// # Examples
///
/// ```
/// logging::init(["/usr/local/bin/myprog"])?;
/// assert_eq!(logging::program_name(), "myprog");
/// # Ok::<(), logging::InitError>(())
/// ```
pub fn init<I, S>(args: I) -> Result<(), InitError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let name = program_name_from_args(args)?;
    with_logger(|logger| logger.set_program_name(name));
    Ok(())
}

/// Replaces the whole process-wide configuration.
pub fn configure(config: LogConfig) {
    with_logger(|logger| logger.set_config(config));
}

/// Returns a copy of the process-wide configuration.
#[must_use]
pub fn config() -> LogConfig {
    with_logger(|logger| logger.config().clone())
}

/// Returns the verbosity threshold.
#[must_use]
pub fn level() -> i32 {
    with_logger(|logger| logger.level())
}

/// Sets the verbosity threshold.
pub fn set_level(level: i32) {
    with_logger(|logger| logger.set_level(level));
}

/// Returns the program-name prefix.
#[must_use]
pub fn program_name() -> String {
    with_logger(|logger| logger.program_name().to_owned())
}

/// Sets the program-name prefix directly.
pub fn set_program_name(name: impl Into<String>) {
    let name = name.into();
    with_logger(|logger| logger.set_program_name(name));
}

/// Reports whether verbose lines are currently emitted.
#[must_use]
pub fn verbose_enabled() -> bool {
    with_logger(|logger| logger.config().verbose_enabled())
}

/// Emits a line of the given severity.
pub fn log(severity: Severity, message: fmt::Arguments<'_>) {
    if severity.is_gated() && !verbose_enabled() {
        return;
    }
    emit(severity, message);
}

/// Writes a standard line to standard output. Prefer [`log_output!`](crate::log_output).
pub fn output(message: fmt::Arguments<'_>) {
    log(Severity::Output, message);
}

/// Writes an error line to standard error. Prefer [`log_error!`](crate::log_error).
pub fn error(message: fmt::Arguments<'_>) {
    log(Severity::Error, message);
}

/// Writes a warning line to standard error. Prefer [`log_warning!`](crate::log_warning).
pub fn warning(message: fmt::Arguments<'_>) {
    log(Severity::Warning, message);
}

/// Writes a verbose line to standard output when the threshold is positive.
/// Prefer [`log_verbose!`](crate::log_verbose).
pub fn verbose(message: fmt::Arguments<'_>) {
    log(Severity::Verbose, message);
}

/// Writes a verbose line when the threshold is at least `min_level`.
pub fn verbose_at(min_level: i32, message: fmt::Arguments<'_>) {
    if with_logger(|logger| logger.config().enabled_at(min_level)) {
        emit(Severity::Verbose, message);
    }
}

/// Dumps `size` bytes of `buffer` starting at `start` to standard output.
pub fn data(buffer: &[u8], start: usize, size: usize) -> Result<(), DataRangeError> {
    with_logger(|logger| logger.data(buffer, start, size))
}

/// Flushes standard output and standard error.
pub fn flush() {
    with_logger(StdLogger::flush);
}
