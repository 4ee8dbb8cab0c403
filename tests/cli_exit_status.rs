// tests/cli_exit_status.rs

#![cfg(unix)]

use std::process::{Command, Output};

fn ntimes(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ntimes"))
        .args(args)
        .env_remove("NTIMES_LOG")
        .output()
        .expect("failed to run ntimes binary")
}

#[test]
fn successful_run_exits_zero() {
    let out = ntimes(&["3", "-p", "1", "-d", "0", "echo", "hi"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "hi\nhi\nhi\n");
}

#[test]
fn zero_count_exits_zero_without_output() {
    let out = ntimes(&["0", "echo", "never"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn failing_child_exits_one_with_message() {
    let out = ntimes(&["3", "sh", "-c", "exit 3"]);

    assert_eq!(out.status.code(), Some(1));
    // Warn-level logs share stderr; the final line is the failure message.
    let stderr = String::from_utf8_lossy(&out.stderr);
    let last = stderr.lines().last().unwrap_or_default();
    assert!(last.starts_with("ntimes: "), "stderr: {stderr}");
    assert!(last.contains("exit code 3"), "stderr: {stderr}");
}

#[test]
fn zero_parallelism_exits_one() {
    let out = ntimes(&["3", "-p", "0", "true"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("ntimes: "), "stderr: {stderr}");
    assert!(stderr.contains("parallel degree 0"), "stderr: {stderr}");
}

#[test]
fn unknown_flag_is_reported_as_parse_error() {
    let out = ntimes(&["--bogus", "3", "true"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("ntimes: flag parse error: "),
        "stderr: {stderr}"
    );
}

#[test]
fn version_flag_prints_build_line() {
    let out = ntimes(&["-v"]);

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.starts_with(&format!("ntimes v{}, build ", env!("CARGO_PKG_VERSION"))),
        "stdout: {stdout}"
    );
}
