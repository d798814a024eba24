#![deny(unsafe_code)]

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[path = "frontend.rs"]
mod frontend;

use logging::{LogConfig, log_warning};
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives, e.g. `warn`.
const LOG_FILTER_ENV: &str = "LOGDUMP_LOG";

fn main() -> ExitCode {
    let args: Vec<OsString> = env::args_os().collect();

    if let Err(error) = logging::init(args.iter().cloned()) {
        log_warning!("{error}");
    }

    let options = match frontend::parse_args(&args) {
        Ok(options) => options,
        Err(error) => error.exit(),
    };

    let mut config = LogConfig::from_verbose_count(options.verbose);
    config.program_name = options.name.clone().unwrap_or_else(logging::program_name);
    logging::configure(config);
    match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => logging::init_tracing_with_filter(filter),
        Err(_) => logging::init_tracing(),
    }

    frontend::run(&options)
}
