//! crates/logging/src/config.rs
//! Verbosity threshold and program-name prefix.

use crate::error::InitError;
use crate::progname::program_name_from_args;
use std::ffi::OsString;

/// Prefix used until a program name has been configured.
pub const DEFAULT_PROGRAM_NAME: &str = "(unknown)";

/// Configuration consulted by every logging call.
///
/// `level <= 0` is normal verbosity; each positive step enables more verbose
/// output. The scale has no upper bound and is chosen by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LogConfig {
    /// Verbosity threshold. Verbose lines are emitted only when this is positive.
    pub level: i32,
    /// Name printed at the start of every line.
    pub program_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: 0,
            program_name: DEFAULT_PROGRAM_NAME.to_owned(),
        }
    }
}

impl LogConfig {
    /// Creates a configuration with the given program name and level `0`.
    #[must_use]
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            level: 0,
            program_name: program_name.into(),
        }
    }

    /// Creates a configuration whose program name is derived from `args[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogConfig;
    ///
    /// let config = LogConfig::from_args(["/usr/local/bin/myprog", "-v"])?;
    /// assert_eq!(config.program_name, "myprog");
    /// assert_eq!(config.level, 0);
    /// # Ok::<(), logging::InitError>(())
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, InitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        program_name_from_args(args).map(Self::new)
    }

    /// Returns the configuration with `level` replaced.
    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Maps the number of `-v` flags seen on a command line to a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogConfig;
    ///
    /// assert_eq!(LogConfig::from_verbose_count(0).level, 0);
    /// assert_eq!(LogConfig::from_verbose_count(3).level, 3);
    /// ```
    #[must_use]
    pub fn from_verbose_count(count: u8) -> Self {
        Self::default().with_level(i32::from(count))
    }

    /// Reports whether verbose lines are emitted.
    #[must_use]
    pub const fn verbose_enabled(&self) -> bool {
        self.level > 0
    }

    /// Reports whether lines requiring at least `min_level` are emitted.
    ///
    /// A `min_level` of zero or below never enables output when the threshold
    /// itself is at normal verbosity, so `enabled_at(0)` behaves like
    /// [`verbose_enabled`](Self::verbose_enabled).
    #[must_use]
    pub const fn enabled_at(&self, min_level: i32) -> bool {
        self.verbose_enabled() && self.level >= min_level
    }
}
