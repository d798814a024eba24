//! Integration tests for the process-wide logger state.
//!
//! These tests mutate shared state and therefore run serially. Output goes to
//! the real standard streams; the assertions cover the configuration the
//! lines are rendered with.

use logging::{DEFAULT_PROGRAM_NAME, InitError, LogConfig};
use serial_test::serial;

fn reset() {
    logging::configure(LogConfig::default());
}

#[test]
#[serial]
fn init_strips_directories_from_argv0() {
    reset();
    logging::init(["/usr/local/bin/myprog", "--flag"]).expect("init succeeds");
    assert_eq!(logging::program_name(), "myprog");
}

#[test]
#[serial]
fn init_keeps_bare_program_name() {
    reset();
    logging::init(["myprog"]).expect("init succeeds");
    assert_eq!(logging::program_name(), "myprog");
}

#[test]
#[serial]
fn failed_init_leaves_prefix_unchanged() {
    reset();
    logging::set_program_name("kept");

    let empty: [&str; 0] = [];
    assert_eq!(logging::init(empty), Err(InitError::MissingArguments));
    assert!(matches!(
        logging::init(["/"]),
        Err(InitError::NoFileName { .. })
    ));
    assert_eq!(logging::program_name(), "kept");
}

#[test]
#[serial]
fn unset_program_name_uses_placeholder() {
    reset();
    assert_eq!(logging::program_name(), DEFAULT_PROGRAM_NAME);
    logging::log_output!("logged with placeholder prefix");
}

#[test]
#[serial]
fn level_round_trips_and_gates_verbose() {
    reset();
    assert_eq!(logging::level(), 0);
    assert!(!logging::verbose_enabled());

    logging::set_level(-2);
    assert!(!logging::verbose_enabled());

    logging::set_level(2);
    assert_eq!(logging::level(), 2);
    assert!(logging::verbose_enabled());
    let level = logging::level();
    logging::log_verbose!("visible at level {level}");
    logging::log_verbose!(level = 3; "still hidden");
}

#[test]
#[serial]
fn configure_replaces_whole_config() {
    reset();
    let config = LogConfig::new("configured").with_level(5);
    logging::configure(config.clone());
    assert_eq!(logging::config(), config);
}

#[test]
#[serial]
fn data_validates_range_against_buffer() {
    reset();
    logging::data(&[0x41, 0x42, 0x43, 0x44], 0, 4).expect("range valid");
    logging::data(b"ABCD", 4, 0).expect("empty range valid");
    let error = logging::data(b"ABCD", 1, 4).expect_err("range overruns");
    assert_eq!(error.start(), 1);
    assert_eq!(error.size(), 4);
}

#[test]
#[serial]
fn logging_from_many_threads_does_not_panic() {
    reset();
    logging::set_program_name("threads");
    let handles: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                for line in 0..8 {
                    logging::log_warning!("thread {index} line {line}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread completes");
    }
    logging::flush();
    assert_eq!(logging::program_name(), "threads");
}

/// A value whose `Display` implementation logs while it is being formatted.
struct Chatty;

impl std::fmt::Display for Chatty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        logging::log_warning!("formatting at level {}", logging::level());
        f.write_str("chatty")
    }
}

#[test]
#[serial]
fn display_that_logs_does_not_deadlock() {
    reset();
    logging::set_level(1);
    let (done, finished) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        logging::log_output!("value {}", Chatty);
        logging::log_verbose!("value {}", Chatty);
        logging::log_verbose!(level = 1; "value {}", Chatty);
        let _ = done.send(());
    });

    finished
        .recv_timeout(std::time::Duration::from_secs(5))
        .expect("nested logging call returns");
}
