//! Integration tests for the oxidizecolor CLI
//!
//! Tests command-line interface functionality including:
//! - Command parsing and validation
//! - Text and JSON rendering
//! - Reading colors from stdin
//! - Error handling and exit status

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Test helper to run CLI command and return output
fn run_cli_command(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_oxidizecolor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

/// Test helper to run CLI command with `input` on stdin
fn run_cli_with_stdin(args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_oxidizecolor"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())?;

    Ok(child.wait_with_output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_convert_command() {
    let output = run_cli_command(&["convert", "#3498db"]).expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert_eq!(
        stdout(&output),
        "HEX  #3498DB\n\
         RGB  52, 152, 219\n\
         CMYK 76%, 31%, 0%, 14%\n\
         HSV  204°, 76%, 86%\n\
         HSL  204°, 70%, 53%\n"
    );
}

#[test]
fn test_cli_convert_pure_black() {
    let output = run_cli_command(&["convert", "#000000"]).expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert!(
        stdout(&output).contains("CMYK 0%, 0%, 0%, 100%"),
        "Pure black should have no colored ink"
    );
}

#[test]
fn test_cli_convert_single_format() {
    let output = run_cli_command(&["convert", "#00FF00", "--format", "hsl"])
        .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert_eq!(stdout(&output), "120°, 100%, 50%\n");
}

#[test]
fn test_cli_convert_format_is_case_insensitive() {
    let output =
        run_cli_command(&["convert", "#ffffff", "-f", "CMYK"]).expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert_eq!(stdout(&output), "0%, 0%, 0%, 0%\n");
}

#[test]
fn test_cli_convert_json() {
    let output =
        run_cli_command(&["convert", "#ff8000", "--json"]).expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("Output should be JSON");
    assert_eq!(value["hex"], "#FF8000");
    assert_eq!(value["rgb"]["r"], 255);
    assert_eq!(value["rgb"]["g"], 128);
    assert_eq!(value["cmyk"]["m"], 50);
    assert_eq!(value["hsl"]["h"], 30);
    assert_eq!(value["hsv"]["s"], 1.0);
}

#[test]
fn test_cli_convert_invalid_digit() {
    let output = run_cli_command(&["convert", "#12G456"]).expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(stdout(&output).is_empty(), "Nothing should be rendered");
    assert!(
        stderr(&output).contains("Invalid hex digit 'G' at position 3"),
        "Should explain the failure: {}",
        stderr(&output)
    );
}

#[test]
fn test_cli_convert_missing_hash() {
    let output = run_cli_command(&["convert", "3498db"]).expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(stderr(&output).contains("Hex color must start with '#'"));
}

#[test]
fn test_cli_convert_wrong_length() {
    let output = run_cli_command(&["convert", "#fff"]).expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(stderr(&output).contains("expected 7 characters, got 4"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_cli_convert_renders_before_failed_copy() {
    let output = Command::new(env!("CARGO_BIN_EXE_oxidizecolor"))
        .args(["convert", "#3498db", "--copy", "hex", "--hold", "0"])
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("XDG_RUNTIME_DIR")
        .output()
        .expect("CLI command should run");

    assert!(!output.status.success(), "Copy without a display should fail");
    assert!(
        stdout(&output).starts_with("HEX  #3498DB\n"),
        "Color should still be rendered: {}",
        stdout(&output)
    );
    assert!(
        stderr(&output).contains("Cannot copy HEX value"),
        "Should explain the failure: {}",
        stderr(&output)
    );
}

#[test]
fn test_cli_unknown_format() {
    let output = run_cli_command(&["convert", "#ffffff", "--format", "lab"])
        .expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(stderr(&output).contains("Unknown color format: lab"));
}

#[test]
fn test_cli_missing_argument() {
    let output = run_cli_command(&["convert"]).expect("CLI command should run");

    assert!(!output.status.success(), "Command should fail");
}

#[test]
fn test_cli_watch_command() {
    let output = run_cli_with_stdin(
        &["watch", "--format", "hex"],
        "#ff0000\n#bad\n\n#0000ff\n",
    )
    .expect("CLI command should run");

    assert!(output.status.success(), "Watch should survive bad lines");
    assert_eq!(stdout(&output), "#FF0000\n#0000FF\n");
    assert!(
        stderr(&output).contains("error: Cannot convert \"#bad\""),
        "Bad line should be reported: {}",
        stderr(&output)
    );
}

#[test]
fn test_cli_watch_json_lines() {
    let output = run_cli_with_stdin(&["watch", "--json"], "#000000\n#ffffff\n")
        .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["cmyk"]["k"], 100);
    assert_eq!(lines[1]["hsl"]["l"], 100);
}

#[test]
fn test_cli_help() {
    let output = run_cli_command(&["--help"]).expect("CLI command should run");

    assert!(output.status.success(), "Help should succeed");
    let help = stdout(&output);
    assert!(help.contains("convert"));
    assert!(help.contains("watch"));
}
