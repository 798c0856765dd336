//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "saltshaker");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.run(&["unknown-command"]);
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "saltshaker");
}

#[test]
fn test_unknown_format_fails() {
    let t = Test::new();

    let output = t.generate(&["--format", "toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown output format");
}

#[test]
fn test_invalid_salt_name_fails() {
    let t = Test::new();

    let output = t.generate(&["-s", "BAD'NAME"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid salt name");
    assert_stderr_contains(&output, "letters, digits and underscore");
}

#[test]
fn test_missing_explicit_config_fails() {
    let t = Test::new();

    let output = t.generate(&["--config", "nope.toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::with_config("salts = 12\n");

    let output = t.generate(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config value for 'salts'");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_saltshaker") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.run(&["completions", "invalid-shell"]);
    assert_failure(&output);
}

#[test]
fn test_oversized_length_fails_cleanly() {
    let t = Test::new();

    t.cmd()
        .args(["generate", "-s", "BIG=18446744073709551615"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too long"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_oversized_config_length_fails_cleanly() {
    let t = Test::with_config("[salts]\nBIG = 100000\n");

    t.cmd()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config value for 'salts'"))
        .stderr(predicate::str::contains("too long"));
}
