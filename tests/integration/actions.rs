// tests/integration/actions.rs
use std::{
    io::{Read, Write},
    process::{Command, Stdio},
};

use predicates::prelude::*;

use crate::common::{Fixture, filecmdr};

#[test]
fn declining_prints_only_line_and_prompt() {
    let fixture = Fixture::new();
    let path = fixture.write_file("notes.txt", "secret\n", 0o644);

    filecmdr()
        .arg(&path)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!("Do you want to list the file {} (y/n): ", path.display())))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn accepting_lists_the_file_with_trailing_newline() {
    let fixture = Fixture::new();
    let path = fixture.write_file("notes.txt", "first\nsecond\n", 0o600);

    filecmdr()
        .arg(&path)
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(format!(
            "Do you want to list the file {} (y/n): first\nsecond\n\n",
            path.display()
        )));
}

#[test]
fn accepting_lists_directory_entries_one_level() {
    let fixture = Fixture::new();
    let dir = fixture.create_dir("box", 0o755);
    fixture.write_file("box/a.txt", "abc", 0o644);
    fixture.create_dir("box/sub", 0o700);
    fixture.write_file("box/sub/deep.txt", "", 0o644);

    let output = filecmdr().arg(&dir).write_stdin("y\n").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5, "{text}");
    assert!(lines[1].starts_with(&format!("Do you want to list the directory {} (y/n): d", dir.display())));
    assert!(lines[1].ends_with(" ."));
    assert!(lines[2].ends_with(" .."));
    assert!(lines[3].starts_with("frw-r--r-- ") && lines[3].ends_with(" a.txt"));
    assert!(lines[4].starts_with("drwx------ ") && lines[4].ends_with(" sub"));
    assert!(!text.contains("deep.txt"));
}

#[test]
fn executable_prompts_for_execution() {
    let fixture = Fixture::new();
    let path = fixture.write_file("run.sh", "#!/bin/sh\necho ran\n", 0o755);

    filecmdr()
        .arg(&path)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("erwxr-xr-x "))
        .stdout(predicate::str::ends_with(format!("Do you want to execute {} (y/n): ", path.display())))
        .stdout(predicate::str::contains("ran").not());
}

#[test]
fn argument_line_swallowed_with_the_answer_is_end_of_input() {
    let fixture = Fixture::new();
    let path = fixture.write_file("run.sh", "#!/bin/sh\necho ran\n", 0o755);

    filecmdr()
        .arg(&path)
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(predicate::str::ends_with(format!("Enter any arguments to {}: ", path.display())))
        .stderr(predicate::str::contains("action failed").and(predicate::str::contains("end of input")));
}

#[test]
fn closed_stdin_counts_as_no() {
    let fixture = Fixture::new();
    let path = fixture.write_file("notes.txt", "body", 0o644);

    filecmdr().arg(&path).write_stdin("").assert().success().stdout(predicate::str::contains("body").not());
}

#[test]
fn accepted_execution_replaces_the_process_with_arguments() {
    let fixture = Fixture::new();
    let path = fixture.write_file("run.sh", "#!/bin/sh\necho \"$0 $@\"\n", 0o755);
    let arguments_prompt = format!("Enter any arguments to {}: ", path.display());

    let mut child = Command::new(env!("CARGO_BIN_EXE_filecmdr"))
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    stdin.write_all(b"y\n").unwrap();
    stdin.flush().unwrap();

    // the argument line must arrive in a separate read from the answer
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !String::from_utf8_lossy(&seen).ends_with(&arguments_prompt) {
        assert_eq!(stdout.read(&mut byte).unwrap(), 1, "output ended early: {}", String::from_utf8_lossy(&seen));
        seen.push(byte[0]);
    }

    stdin.write_all(b"-l   two\twords\n").unwrap();
    drop(stdin);

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    assert!(child.wait().unwrap().success());
    assert_eq!(rest, format!("{} -l two words\n", path.display()));
}
