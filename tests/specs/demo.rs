//! Behavioral specs for running `strops` without a command.

use crate::prelude::*;

/// > With no arguments, prints the palindrome result then the compressed string
#[test]
fn demo_prints_exact_output() {
    let output = strops_cmd().output().expect("command should run");
    assert!(output.status.success());
    similar_asserts::assert_eq!(String::from_utf8_lossy(&output.stdout).into_owned(), "true\na3b2cd5f5\n");
}

/// > The demo ignores configuration
#[test]
fn demo_ignores_config() {
    let project = Project::with_config("[output]\nformat = \"json\"\n");

    strops_cmd()
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("true\na3b2cd5f5\n");
}

/// > The demo does not even read a broken config
#[test]
fn demo_ignores_invalid_config() {
    let project = Project::with_config("version = 99\n");

    strops_cmd()
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("true\na3b2cd5f5\n");
}

/// > Logging goes to stderr, never stdout
#[test]
fn demo_stdout_is_clean_with_logging_enabled() {
    strops_cmd()
        .env("STROPS_LOG", "trace")
        .assert()
        .success()
        .stdout("true\na3b2cd5f5\n");
}
