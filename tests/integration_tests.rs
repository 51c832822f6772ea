//! Integration tests for the startup report.
//!
//! These tests drive the library end to end and run the built binary,
//! checking the exact bytes written to standard output.

use std::{
    fs::OpenOptions,
    process::{Command, Stdio},
};

use startup_reporter::reporter::{reporter::run, steps::startup_program};

const EXPECTED: &str = "hari\n\
Variable is of type: string \n\
false\n\
The type is: bool \n\
22\n\
The type is uint8 \n\
Hari Prasath\n\
2025\n\
CEVA\n";

fn run_binary() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_startup-reporter"))
        .output()
        .expect("Failed to run startup-reporter")
}

#[test]
fn test_library_report_matches_expected() {
    let mut out = Vec::new();
    run(&startup_program(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_binary_exits_successfully() {
    let output = run_binary();

    assert!(output.status.success(), "Binary should exit with status 0");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_binary_output_is_deterministic() {
    let first = run_binary();
    let second = run_binary();

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_values_on_their_own_lines() {
    let output = String::from_utf8(run_binary().stdout).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    for value in ["hari", "false", "22", "Hari Prasath", "2025", "CEVA"] {
        assert!(lines.contains(&value), "Missing line `{}`", value);
    }
}

#[test]
fn test_type_tags_follow_their_values() {
    let output = String::from_utf8(run_binary().stdout).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "hari");
    assert!(lines[1].ends_with("string "));
    assert_eq!(lines[2], "false");
    assert!(lines[3].ends_with("bool "));
    assert_eq!(lines[4], "22");
    assert!(lines[5].ends_with("uint8 "));
}

#[cfg(target_os = "linux")]
#[test]
fn test_binary_write_failure_is_fatal() {
    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("Failed to open /dev/full");

    let output = Command::new(env!("CARGO_BIN_EXE_startup-reporter"))
        .stdout(Stdio::from(full))
        .output()
        .expect("Failed to run startup-reporter");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.starts_with("Error: OutputWriteError\n-> step 2\n"),
        "Unexpected diagnostic: {}",
        stderr
    );
}
