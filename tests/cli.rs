//! CLI-level tests. These never touch the network: they exercise argument
//! handling and the invalid-URL abort path, which fails before any request.

use assert_cmd::Command;
use predicates::prelude::*;

fn dirfetch_cmd() -> Command {
    Command::cargo_bin("dirfetch").expect("binary under test")
}

#[test]
fn test_invalid_url_exits_nonzero_with_diagnostic() {
    dirfetch_cmd()
        .arg("https://github.com/octo/widgets")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unrecognized repository directory URL"));
}

#[test]
fn test_quiet_suppresses_all_diagnostics() {
    dirfetch_cmd()
        .arg("--quiet")
        .arg("not-even-a-url")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_url_is_a_usage_error() {
    dirfetch_cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_describes_the_tool() {
    dirfetch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Download a single directory"))
        .stdout(predicate::str::contains("--requests"));
}

#[test]
fn test_zero_requests_is_rejected_by_clap() {
    dirfetch_cmd()
        .args([
            "https://github.com/u/r/tree/main/docs",
            "--requests",
            "0",
        ])
        .assert()
        .failure()
        .code(2);
}
