//! Behavioral specs for the `palindrome`, `compress` and `expand` commands.

use crate::prelude::*;

fn run_in_empty_project(args: &[&str]) -> assert_cmd::assert::Assert {
    let project = Project::empty();
    strops_cmd().args(args).current_dir(project.path()).assert()
}

// =============================================================================
// palindrome
// =============================================================================

#[test]
fn palindrome_reports_true() {
    run_in_empty_project(&["palindrome", "racecar"])
        .success()
        .stdout("true\n");
}

#[test]
fn palindrome_reports_false() {
    run_in_empty_project(&["palindrome", "hello"])
        .success()
        .stdout("false\n");
}

#[test]
fn palindrome_accepts_empty_text() {
    run_in_empty_project(&["palindrome", ""])
        .success()
        .stdout("true\n");
}

#[test]
fn palindrome_is_case_sensitive_by_default() {
    run_in_empty_project(&["palindrome", "Madam"])
        .success()
        .stdout("false\n");
}

#[test]
fn palindrome_fold_case_ignores_case() {
    run_in_empty_project(&["palindrome", "Madam", "--fold-case"])
        .success()
        .stdout("true\n");
}

#[test]
fn palindrome_json_output() {
    let project = Project::empty();
    let output = strops_cmd()
        .args(["palindrome", "abba", "-o", "json"])
        .current_dir(project.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["input"], "abba");
    assert_eq!(json["palindrome"], true);
    assert_eq!(json["fold_case"], false);
}

// =============================================================================
// compress
// =============================================================================

#[test]
fn compress_prints_encoded_text() {
    run_in_empty_project(&["compress", "aaabbcdddddfffff"])
        .success()
        .stdout("a3b2cd5f5\n");
}

#[test]
fn compress_empty_text_prints_empty_line() {
    run_in_empty_project(&["compress", ""])
        .success()
        .stdout("\n");
}

#[test]
fn compress_json_lists_runs() {
    let project = Project::empty();
    let output = strops_cmd()
        .args(["compress", "aab", "--output", "json"])
        .current_dir(project.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["compressed"], "a2b");
    assert_eq!(
        json["runs"],
        serde_json::json!([{ "char": "a", "len": 2 }, { "char": "b", "len": 1 }])
    );
}

// =============================================================================
// expand
// =============================================================================

#[test]
fn expand_prints_decoded_text() {
    run_in_empty_project(&["expand", "a3b2cd5f5"])
        .success()
        .stdout("aaabbcdddddfffff\n");
}

#[test]
fn expand_json_output() {
    let project = Project::empty();
    let output = strops_cmd()
        .args(["expand", "x3", "-o", "json"])
        .current_dir(project.path())
        .output()
        .expect("command should run");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["expanded"], "xxx");
}

#[test]
fn expand_rejects_leading_digit() {
    run_in_empty_project(&["expand", "--", "3a"])
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("error: count at offset 0"));
}

#[test]
fn expand_rejects_zero_count() {
    run_in_empty_project(&["expand", "a0"])
        .code(2)
        .stderr(predicates::str::contains("is zero"));
}

#[test]
fn expand_rejects_leading_zero() {
    run_in_empty_project(&["expand", "a05"])
        .code(2)
        .stderr(predicates::str::contains("leading zero"));
}

#[test]
fn expand_rejects_count_too_large_for_usize() {
    let encoded = format!("a{}", "9".repeat(40));
    run_in_empty_project(&["expand", &encoded])
        .code(2)
        .stderr(predicates::str::contains("is too large"));
}

#[test]
fn expand_rejects_count_that_cannot_be_allocated() {
    run_in_empty_project(&["expand", "a18446744073709551615"])
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("exceeds"));
}

#[test]
fn expand_rejects_output_over_limit() {
    run_in_empty_project(&["expand", "a9999999999"])
        .code(2)
        .stderr(predicates::str::contains("exceeds"));
}
