use thiserror::Error;

/// Errors reported while deriving the program-name prefix.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InitError {
    /// The argument list was empty, so there is no `argv[0]` to inspect.
    #[error("argument list is empty; cannot derive a program name")]
    MissingArguments,
    /// `argv[0]` has no file-name component (for example `""`, `/` or `..`).
    #[error("cannot derive a program name from {path:?}")]
    NoFileName {
        /// The offending `argv[0]`, converted lossily.
        path: String,
    },
}
