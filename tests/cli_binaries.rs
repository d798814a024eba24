use std::path::Path;
use std::process::{Command, Output};

const LOG_FILTER_ENV: &str = "LOGDUMP_LOG";

fn logdump_with_filter(args: &[&str], filter: Option<&str>) -> Output {
    let path = env!("CARGO_BIN_EXE_logdump");
    let mut command = Command::new(path);
    command.args(args).env_remove(LOG_FILTER_ENV);
    if let Some(filter) = filter {
        command.env(LOG_FILTER_ENV, filter);
    }
    command
        .output()
        .unwrap_or_else(|error| panic!("failed to run {path}: {error}"))
}

fn logdump(args: &[&str]) -> Output {
    logdump_with_filter(args, None)
}

fn utf8(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("output should be valid UTF-8")
}

fn write_file(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path.to_str().expect("utf-8 path").to_owned()
}

#[test]
fn dump_lines_use_executable_name_as_prefix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "abcd.bin", &[0x41, 0x42, 0x43, 0x44]);

    let output = logdump(&[&file]);
    assert!(output.status.success(), "dump should succeed");
    assert!(output.stderr.is_empty(), "no diagnostics expected");

    let stdout = utf8(&output.stdout);
    assert!(stdout.lines().all(|line| line.starts_with("logdump: ")));
    assert!(stdout.contains("logdump: data: 00000000  41 42 43 44"));
    assert!(stdout.contains("|ABCD|"));
    assert!(stdout.contains("logdump: dumped 1 of 1 files"));
}

#[test]
fn verbose_lines_require_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.bin", b"hello");

    let quiet = utf8(&logdump(&[&file]).stdout);
    assert!(!quiet.contains("verbose:"));

    let loud = utf8(&logdump(&["-v", &file]).stdout);
    assert!(loud.contains("logdump: verbose: "));
    assert!(loud.contains("5 bytes, dumping 5 at offset 0"));
    assert!(loud.contains("verbose: reading path="));
}

#[test]
fn tracing_filter_from_environment_hides_debug_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.bin", b"hello");

    let filtered = utf8(&logdump_with_filter(&["-v", &file], Some("info")).stdout);
    assert!(!filtered.contains("verbose: reading path="));
    assert!(filtered.contains("5 bytes, dumping 5 at offset 0"));

    let open = utf8(&logdump_with_filter(&["-v", &file], Some("debug")).stdout);
    assert!(open.contains("verbose: reading path="));
}

#[test]
fn name_override_changes_prefix() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.bin", b"xyz");

    let output = logdump(&["--name", "beep", &file]);
    let stdout = utf8(&output.stdout);
    assert!(stdout.lines().all(|line| line.starts_with("beep: ")));
}

#[test]
fn window_selects_absolute_offsets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let contents: Vec<u8> = (0u8..64).collect();
    let file = write_file(dir.path(), "ramp.bin", &contents);

    let output = logdump(&["--offset", "32", "--length", "4", &file]);
    assert!(output.status.success());
    let stdout = utf8(&output.stdout);
    assert!(stdout.contains("data: 00000020  20 21 22 23"));
    assert_eq!(stdout.matches("data: ").count(), 1);
}

#[test]
fn empty_file_produces_warning_on_stderr() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "empty.bin", b"");

    let output = logdump(&[&file]);
    assert!(output.status.success(), "empty files are not fatal");
    let stderr = utf8(&output.stderr);
    assert!(stderr.starts_with("logdump: warning: "));
    assert!(stderr.contains("is empty"));
}

#[test]
fn missing_file_fails_with_error_on_stderr() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.bin");

    let output = logdump(&[missing.to_str().expect("utf-8 path")]);
    assert!(!output.status.success());
    let stderr = utf8(&output.stderr);
    assert!(stderr.starts_with("logdump: error: cannot read "));
    assert!(utf8(&output.stdout).contains("dumped 0 of 1 files"));
}

#[test]
fn out_of_range_window_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "short.bin", b"ABCD");

    let output = logdump(&["--offset", "2", "--length", "8", &file]);
    assert!(!output.status.success());
    let stderr = utf8(&output.stderr);
    assert!(stderr.contains("error: "));
    assert!(stderr.contains("exceeds buffer of 4 bytes"));
    assert!(!utf8(&output.stdout).contains("data: "));
}

#[test]
fn help_lists_usage() {
    let output = logdump(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(output.stderr.is_empty());
    assert!(utf8(&output.stdout).contains("Usage:"));
}

#[test]
fn missing_operand_fails() {
    let output = logdump(&[]);
    assert!(!output.status.success());
    assert!(utf8(&output.stderr).contains("Usage:"));
}
