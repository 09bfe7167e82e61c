// tests/integration/usage.rs
use predicates::prelude::*;

use crate::common::{Fixture, filecmdr};

#[test]
fn missing_argument_prints_usage_and_fails() {
    filecmdr()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("<pathname>")));
}

#[test]
fn shows_version() {
    filecmdr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn nonexistent_path_fails_without_output() {
    let fixture = Fixture::new();
    filecmdr()
        .arg(fixture.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("inspection failed"));
}

#[test]
fn empty_path_is_reported_on_stderr() {
    filecmdr()
        .arg("")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("inspection failed").and(predicate::str::contains("empty path")));
}

#[test]
fn name_with_leading_hyphen_is_inspected() {
    let fixture = Fixture::new();
    fixture.write_file("-odd", "x", 0o644);

    filecmdr()
        .current_dir(fixture.path())
        .arg("-odd")
        .write_stdin("n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("frw-r--r-- "))
        .stdout(predicate::str::contains(" -odd\nDo you want to list the file -odd (y/n): "));
}
