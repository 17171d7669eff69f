//! CLI end-to-end tests.
//!
//! Run the built binary with piped stdin and check its output and status.
#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the binary with the given stdin and return (stdout, exit code).
fn run_cli(args: &[&str], stdin: &str) -> (String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_recipe-book"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start recipe-book");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for recipe-book");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, code)
}

#[test]
fn test_exit_command_exits_with_status_zero() {
    let (stdout, code) = run_cli(&[], "4\n");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Welcome to Recipe App!"));
}

#[test]
fn test_exit_after_adding_and_selecting() {
    let input = "1\nToast\n1\nBread\n2\nslices\n80\ngrains\n1\nToast it\n3\n1\n4\n";
    let (stdout, code) = run_cli(&["--no-banner"], input);
    assert_eq!(code, 0);
    assert!(!stdout.contains("Welcome to Recipe App!"));
    assert!(stdout.contains("2 slices of Bread"));
    assert!(stdout.contains("Total calories: 160"));
}

#[test]
fn test_end_of_input_exits_with_status_zero() {
    let (_, code) = run_cli(&["--no-banner"], "2\n");
    assert_eq!(code, 0);
}
