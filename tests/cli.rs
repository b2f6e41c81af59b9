// Runs the built binary with piped stdin in a scratch working directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_cli(cwd: &Path, input: &str, envs: &[(&str, &str)]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_course-registration"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn routine_errors_print_only_the_console_block() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(dir.path(), "9\n4\n", &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("File not found."));
    assert!(stdout.contains("Invalid option.  Please choose between 1-4."));
    assert!(stdout.contains("Program Ended."));
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn saves_to_enrollments_json_in_the_working_directory() {
    let dir = TempDir::new().unwrap();
    let elsewhere = dir.path().join("other.json");

    let output = run_cli(
        dir.path(),
        "1\nAnn\nLee\nBiology\n3\n4\n",
        &[("COURSE_REGISTRATION_FILE", elsewhere.to_str().unwrap())],
    );

    assert!(output.status.success());
    assert!(!elsewhere.exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("enrollments.json")).unwrap(),
        r#"[{"FirstName":"Ann","LastName":"Lee","CourseName":"Biology"}]"#
    );
}

#[test]
fn closed_stdin_still_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(dir.path(), "2\n", &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Unknown Error. Please contact support."));
}
