//! Tests for `saltshaker generate`.

use crate::support::*;
use predicates::prelude::*;

/// Split `NAME='value'` lines into pairs.
fn env_pairs(block: &str) -> Vec<(String, String)> {
    salt_lines(block)
        .into_iter()
        .map(|line| {
            let (name, rest) = line.split_once("='").expect("not an env line");
            let value = rest.strip_suffix('\'').expect("unterminated env value");
            (name.to_string(), value.to_string())
        })
        .collect()
}

#[test]
fn test_generate_defaults_as_php() {
    let t = Test::new();

    let output = t.generate(&[]);
    assert_success(&output);

    let out = stdout(&output);
    let lines = salt_lines(&out);
    assert_eq!(lines.len(), DEFAULT_NAMES.len());
    for (line, name) in lines.iter().zip(DEFAULT_NAMES) {
        let rest = line
            .strip_prefix(&format!("define('{}', '", name))
            .unwrap_or_else(|| panic!("unexpected line: {}", line));
        let value = rest.strip_suffix("');").expect("unterminated define");
        let expected = if *name == "WP_CACHE_KEY_SALT" { 32 } else { 64 };
        assert_eq!(value.len(), expected);
        assert_alphabet(value);
    }
}

#[test]
fn test_generate_env_block_shape() {
    let t = Test::new();

    let output = t.generate(&["--format", "env"]);
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with('\n'), "block should start with a newline");
    assert!(out.ends_with("'\n"), "block should end with one newline");

    let pairs = env_pairs(&out);
    let names: Vec<&str> = pairs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, DEFAULT_NAMES);
    for (_, value) in &pairs {
        assert_alphabet(value);
    }
}

#[test]
fn test_generate_yaml_lowercases_names() {
    let t = Test::new();

    let output = t.generate(&["-f", "YML"]);
    assert_success(&output);

    let out = stdout(&output);
    let first = salt_lines(&out)[0];
    assert!(first.starts_with("auth_key: \""), "got: {}", first);
    assert!(first.ends_with('"'));
}

#[test]
fn test_generate_with_extra_names_and_lengths() {
    let t = Test::new();

    let output = t.generate(&["-f", "env", "-s", "EXTRA_KEY", "--salt", "AUTH_KEY=16"]);
    assert_success(&output);

    let pairs = env_pairs(&stdout(&output));
    assert_eq!(pairs.len(), 10);
    assert_eq!(pairs[0].0, "AUTH_KEY");
    assert_eq!(pairs[0].1.len(), 16);
    assert_eq!(pairs[9].0, "EXTRA_KEY");
    assert_eq!(pairs[9].1.len(), 64);
}

#[test]
fn test_generate_non_numeric_length_uses_default() {
    let t = Test::new();

    let output = t.generate(&["-f", "env", "-s", "ODD=many"]);
    assert_success(&output);

    let pairs = env_pairs(&stdout(&output));
    assert_eq!(pairs.last().unwrap().0, "ODD");
    assert_eq!(pairs.last().unwrap().1.len(), 64);
}

#[test]
fn test_generate_twice_differs() {
    let t = Test::new();

    let first = t.generate(&["-f", "env"]);
    let second = t.generate(&["-f", "env"]);
    assert_success(&first);
    assert_success(&second);
    assert_ne!(stdout(&first), stdout(&second));
}

#[test]
fn test_generate_uses_config_format_and_salts() {
    let t = Test::with_config(CONFIG_WITH_LENGTHS);

    let output = t.generate(&[]);
    assert_success(&output);

    let pairs = env_pairs(&stdout(&output));
    assert_eq!(pairs.len(), 10);
    assert_eq!(pairs[0].1.len(), 16);
    assert_eq!(pairs[9].0, "FROM_CONFIG");
    assert_eq!(pairs[9].1.len(), 24);
}

#[test]
fn test_generate_flag_beats_config_format() {
    let t = Test::with_config(CONFIG_WITH_LENGTHS);

    let output = t.generate(&["--format", "php"]);
    assert_success(&output);
    assert_stdout_contains(&output, "define('AUTH_KEY', '");
}

#[test]
fn test_generate_lowercase_name_replaces_default() {
    let t = Test::new();

    let output = t.generate(&["-f", "env", "-s", "auth_key=16"]);
    assert_success(&output);

    let pairs = env_pairs(&stdout(&output));
    let auth: Vec<_> = pairs.iter().filter(|(n, _)| n == "AUTH_KEY").collect();
    assert_eq!(auth.len(), 1, "AUTH_KEY rendered more than once");
    assert_eq!(auth[0].1.len(), 16);
    assert_eq!(pairs.len(), DEFAULT_NAMES.len());
}

#[test]
fn test_generate_php_defines_each_constant_once() {
    let t = Test::new();

    t.cmd()
        .args(["generate", "-s", "nonce_salt=20", "-s", "Nonce_Salt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("define('NONCE_SALT', '").count(1));
}
