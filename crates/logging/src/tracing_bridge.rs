//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the process-wide logger.
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that renders tracing events
//! through the same program-prefixed lines as the `log_*!` macros, so
//! libraries instrumented with `tracing` report through the program's
//! logger.
//!
//! | tracing level | logger call             |
//! |---------------|-------------------------|
//! | `ERROR`       | error                   |
//! | `WARN`        | warning                 |
//! | `INFO`        | output                  |
//! | `DEBUG`       | verbose at level 1      |
//! | `TRACE`       | verbose at level 2      |
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init(std::env::args_os())?;
//! logging::set_level(1);
//! logging::init_tracing();
//!
//! tracing::warn!("disk almost full");    // prog: warning: disk almost full
//! tracing::debug!(bytes = 42, "wrote"); // prog: verbose: wrote bytes=42
//! ```

use crate::global;
use crate::logger::Logger;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, Layered, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Logger call a tracing event is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    /// Standard output line.
    Output,
    /// Warning line.
    Warning,
    /// Error line.
    Error,
    /// Verbose line requiring at least the given threshold.
    Verbose(i32),
}

impl Route {
    /// Maps a tracing level to the logger call that renders it.
    #[must_use]
    pub const fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warning,
            Level::INFO => Self::Output,
            Level::DEBUG => Self::Verbose(1),
            // Level::TRACE
            _ => Self::Verbose(2),
        }
    }

    /// Reports whether a line on this route would be emitted at `level`.
    #[must_use]
    pub const fn enabled_at(self, level: i32) -> bool {
        match self {
            Self::Verbose(min) => level > 0 && level >= min,
            Self::Output | Self::Warning | Self::Error => true,
        }
    }
}

/// Destination for events accepted by [`LoggerLayer`].
pub trait RouteTarget: Send + Sync + 'static {
    /// Current verbosity threshold of the destination.
    fn level(&self) -> i32;

    /// Writes `message` through the logger call selected by `route`.
    fn emit(&self, route: Route, message: fmt::Arguments<'_>);
}

/// The process-wide logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessLogger;

impl RouteTarget for ProcessLogger {
    fn level(&self) -> i32 {
        global::level()
    }

    fn emit(&self, route: Route, message: fmt::Arguments<'_>) {
        match route {
            Route::Output => global::output(message),
            Route::Warning => global::warning(message),
            Route::Error => global::error(message),
            Route::Verbose(min) => global::verbose_at(min, message),
        }
    }
}

impl<O, E> RouteTarget for Arc<Mutex<Logger<O, E>>>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    fn level(&self) -> i32 {
        self.lock().unwrap_or_else(PoisonError::into_inner).level()
    }

    fn emit(&self, route: Route, message: fmt::Arguments<'_>) {
        let mut logger = self.lock().unwrap_or_else(PoisonError::into_inner);
        match route {
            Route::Output => logger.output(message),
            Route::Warning => logger.warning(message),
            Route::Error => logger.error(message),
            Route::Verbose(min) => logger.verbose_at(min, message),
        }
    }
}

/// A tracing layer that forwards events to a [`RouteTarget`], by default
/// the process-wide logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggerLayer<T = ProcessLogger> {
    target: T,
}

impl LoggerLayer {
    /// Creates a layer writing to the process-wide logger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: ProcessLogger,
        }
    }
}

impl<T> LoggerLayer<T> {
    /// Creates a layer writing to `target`.
    ///
    /// A shared [`Logger`] works as a target, which keeps the lines away from
    /// the standard streams:
    ///
    /// ```
    /// use logging::{LogConfig, Logger, LoggerLayer};
    /// use std::sync::{Arc, Mutex};
    ///
    /// let logger = Arc::new(Mutex::new(Logger::new(LogConfig::new("app"), Vec::<u8>::new(), Vec::<u8>::new())));
    /// let layer = LoggerLayer::with_target(Arc::clone(&logger));
    /// # drop(layer);
    /// ```
    #[must_use]
    pub const fn with_target(target: T) -> Self {
        Self { target }
    }
}

impl<S, T> Layer<S> for LoggerLayer<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    T: RouteTarget,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let route = Route::for_level(event.metadata().level());
        if !route.enabled_at(self.target.level()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = visitor.finish();
        self.target.emit(route, format_args!("{text}"));
    }
}

/// Visitor collecting the `message` field followed by `name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), &format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), &value);
        }
    }
}

/// Installs [`LoggerLayer`] as the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_tracing() {
    tracing_subscriber::registry().with(LoggerLayer::new()).init();
}

/// Installs [`LoggerLayer`] behind an additional filter layer.
///
/// Events the filter rejects never reach the logger, whatever its
/// verbosity.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::new("warn"));
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<Registry> + Send + Sync + 'static,
{
    filtered(filter, LoggerLayer::new()).init();
}

fn filtered<F, T>(
    filter: F,
    layer: LoggerLayer<T>,
) -> Layered<LoggerLayer<T>, Layered<F, Registry>>
where
    F: Layer<Registry> + Send + Sync + 'static,
    T: RouteTarget,
{
    tracing_subscriber::registry().with(filter).with(layer)
}
