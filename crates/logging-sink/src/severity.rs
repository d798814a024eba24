/// Severity of an emitted log line.
///
/// The severity decides which standard stream receives the line and which tag,
/// if any, follows the program-name prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Standard informational output, rendered without a tag.
    Output,
    /// Verbose output, only emitted when the verbosity threshold allows it.
    Verbose,
    /// Warning diagnostic.
    Warning,
    /// Error diagnostic.
    Error,
}

/// Standard stream a [`Severity`] is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stream {
    /// The primary output stream.
    Stdout,
    /// The diagnostic stream.
    Stderr,
}

impl Severity {
    /// Returns the tag rendered between the program name and the message.
    ///
    /// Standard output carries no tag so that `prog: text` reads like any
    /// other command-line tool.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Severity;
    ///
    /// assert_eq!(Severity::Output.tag(), None);
    /// assert_eq!(Severity::Error.tag(), Some("error"));
    /// ```
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Output => None,
            Self::Verbose => Some("verbose"),
            Self::Warning => Some("warning"),
            Self::Error => Some("error"),
        }
    }

    /// Returns the stream that lines of this severity are written to.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::{Severity, Stream};
    ///
    /// assert_eq!(Severity::Output.stream(), Stream::Stdout);
    /// assert_eq!(Severity::Verbose.stream(), Stream::Stdout);
    /// assert_eq!(Severity::Warning.stream(), Stream::Stderr);
    /// assert_eq!(Severity::Error.stream(), Stream::Stderr);
    /// ```
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Output | Self::Verbose => Stream::Stdout,
            Self::Warning | Self::Error => Stream::Stderr,
        }
    }

    /// Reports whether lines of this severity are subject to verbosity gating.
    #[must_use]
    pub const fn is_gated(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verbose_is_gated() {
        assert!(Severity::Verbose.is_gated());
        assert!(!Severity::Output.is_gated());
        assert!(!Severity::Warning.is_gated());
        assert!(!Severity::Error.is_gated());
    }

    #[test]
    fn diagnostics_route_to_stderr() {
        assert_eq!(Severity::Warning.stream(), Stream::Stderr);
        assert_eq!(Severity::Error.stream(), Stream::Stderr);
        assert_eq!(Severity::Output.tag(), None);
        assert_eq!(Severity::Warning.tag(), Some("warning"));
    }
}
