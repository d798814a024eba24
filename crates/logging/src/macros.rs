//! crates/logging/src/macros.rs
//! Formatting macros over the process-wide logger.
//!
//! Each macro accepts the same arguments as [`format!`] and forwards a
//! [`core::fmt::Arguments`] value, so mismatched placeholders are rejected at
//! compile time.

/// Write a standard line to standard output.
///
/// # Example
/// ```
/// logging::log_output!("{} files processed", 3);
/// ```
#[macro_export]
macro_rules! log_output {
    ($($arg:tt)*) => {
        $crate::output(::core::format_args!($($arg)*))
    };
}

/// Write an error line to standard error.
///
/// # Example
/// ```
/// logging::log_error!("cannot open {}: {}", "/dev/console", "permission denied");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::error(::core::format_args!($($arg)*))
    };
}

/// Write a warning line to standard error.
///
/// # Example
/// ```
/// logging::log_warning!("falling back to {}", "stdout");
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::warning(::core::format_args!($($arg)*))
    };
}

/// Write a verbose line to standard output when the threshold allows it.
///
/// The `level = N;` form emits only when the threshold is at least `N`.
///
/// # Example
/// ```
/// logging::set_level(2);
/// logging::log_verbose!("using device {}", "/dev/tty0");
/// logging::log_verbose!(level = 2; "ioctl returned {}", 0);
/// ```
#[macro_export]
macro_rules! log_verbose {
    (level = $level:expr; $($arg:tt)*) => {
        $crate::verbose_at($level, ::core::format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::verbose(::core::format_args!($($arg)*))
    };
}
