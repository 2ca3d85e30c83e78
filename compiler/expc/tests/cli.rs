//! End-to-end tests driving the `exp` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn source_file(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".exp").tempfile().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

fn exp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exp"))
        .args(args)
        .env_remove("EXP_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_program_output() {
    let file = source_file(
        "fun fib(n) { if (n <= 1) { return 1 } return fib(n - 1) + fib(n - 2) }\n\
         var i = 1\n\
         while (i <= 5) { println(i, fib(i)) i = i + 1 }\n",
    );
    let output = exp(&["run", file.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "1 1\n2 2\n3 3\n4 5\n5 8\n");
}

#[test]
fn bare_path_runs() {
    let file = source_file("println(1, 2)");
    let output = exp(&[file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2\n");
}

#[test]
fn runtime_error_exits_nonzero_with_diagnostic() {
    let file = source_file("println(7)\na = 3\n");
    let output = exp(&["run", "--color=never", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "7\n");
    assert!(
        stderr(&output).starts_with("error[E6003]: undefined variable `a`"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn parse_error_shows_location() {
    let file = source_file("var a = 1\nprintln(a b)\n");
    let path = file.path().to_str().unwrap();
    let output = exp(&["run", "--color=never", path]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error[E1001]: expected `)`"), "{err}");
    assert!(err.contains(&format!("{path}:2:11")), "{err}");
    assert!(err.contains("2 | println(a b)"), "{err}");
}

#[test]
fn max_depth_flag() {
    let file = source_file("fun f(n) { return f(n + 1) } f(0)");
    let path = file.path().to_str().unwrap();
    let output = exp(&["run", "--color=never", "--max-depth=20", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("call depth limit of 20 exceeded"));

    let output = exp(&["run", "--max-depth=zero", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid value 'zero' for --max-depth"));
}

#[test]
fn lex_and_parse_commands() {
    let file = source_file("var x=1;x=x+2");
    let path = file.path().to_str().unwrap();

    let output = exp(&["lex", path]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("1:1 `var`\n1:5 identifier `x`\n"));

    let output = exp(&["parse", path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "var x = 1\nx = x + 2\n");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.exp");
    let output = exp(&["run", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: cannot read '"));
}

#[test]
fn unknown_command_prints_usage_to_stderr() {
    let output = exp(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Unknown command: frobnicate"));
    assert!(err.contains("Usage: exp <command>"));
    assert_eq!(stdout(&output), "");
}

#[test]
fn help_and_version() {
    let output = exp(&["help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Commands:"));

    let output = exp(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("exp {}\n", env!("CARGO_PKG_VERSION"))
    );
}
