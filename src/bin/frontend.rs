use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use logging::{log_error, log_output, log_verbose, log_warning};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Options accepted by `logdump`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Number of `-v` flags supplied.
    pub verbose: u8,
    /// Program name overriding the one derived from `argv[0]`.
    pub name: Option<String>,
    /// Offset of the first byte dumped from each file.
    pub offset: usize,
    /// Number of bytes dumped from each file; the rest of the file when absent.
    pub length: Option<usize>,
    /// Files to dump.
    pub files: Vec<PathBuf>,
}

fn command() -> Command {
    Command::new("logdump")
        .about("Dump files as hex through the program logger.")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Prefix lines with NAME instead of the executable name."),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_name("BYTES")
                .help("Start dumping at BYTES into each file.")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .value_name("BYTES")
                .help("Dump at most BYTES from each file.")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Files to dump.")
                .value_parser(value_parser!(PathBuf))
                .num_args(1..)
                .required(true),
        )
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            verbose: matches.get_count("verbose"),
            name: matches.get_one::<String>("name").cloned(),
            offset: matches.get_one::<usize>("offset").copied().unwrap_or(0),
            length: matches.get_one::<usize>("length").copied(),
            files: matches
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

/// Parses command-line arguments, including the program name in position zero.
pub fn parse_args<I, S>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    command()
        .try_get_matches_from(args)
        .map(|matches| Options::from_matches(&matches))
}

/// Dumps every file named in `options` through the process-wide logger.
///
/// Unreadable files and out-of-range windows are reported as errors and make
/// the run fail; empty files only produce a warning.
pub fn run(options: &Options) -> ExitCode {
    let mut failed = false;
    let mut dumped = 0usize;

    for path in &options.files {
        tracing::debug!(path = %path.display(), "reading");

        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(error) => {
                log_error!("cannot read {}: {}", path.display(), error);
                failed = true;
                continue;
            }
        };

        if contents.is_empty() {
            log_warning!("{} is empty", path.display());
            continue;
        }

        let size = options
            .length
            .unwrap_or_else(|| contents.len().saturating_sub(options.offset));
        log_verbose!(
            "{}: {} bytes, dumping {} at offset {}",
            path.display(),
            contents.len(),
            size,
            options.offset
        );

        if let Err(error) = logging::data(&contents, options.offset, size) {
            log_error!("{}: {}", path.display(), error);
            failed = true;
            continue;
        }
        dumped += 1;
    }

    log_output!("dumped {} of {} files", dumped, options.files.len());
    logging::flush();

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
