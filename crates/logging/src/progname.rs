//! crates/logging/src/progname.rs
//! Derivation of the program-name prefix from `argv[0]`.

use crate::error::InitError;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Returns the non-directory portion of `arg0`.
///
/// Separators are those of the host platform. Names that are not valid UTF-8
/// are converted lossily.
///
/// # Examples
///
/// ```
/// use logging::program_name_from_path;
/// use std::ffi::OsStr;
///
/// assert_eq!(program_name_from_path(OsStr::new("/usr/local/bin/myprog"))?, "myprog");
/// assert_eq!(program_name_from_path(OsStr::new("myprog"))?, "myprog");
/// assert!(program_name_from_path(OsStr::new("/")).is_err());
/// # Ok::<(), logging::InitError>(())
/// ```
pub fn program_name_from_path(arg0: &OsStr) -> Result<String, InitError> {
    Path::new(arg0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| InitError::NoFileName {
            path: arg0.to_string_lossy().into_owned(),
        })
}

/// Returns the program name derived from the first element of `args`.
pub fn program_name_from_args<I, S>(args: I) -> Result<String, InitError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let arg0: OsString = args
        .into_iter()
        .next()
        .ok_or(InitError::MissingArguments)?
        .into();
    program_name_from_path(&arg0)
}
