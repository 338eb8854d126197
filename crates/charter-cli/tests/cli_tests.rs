//! Integration tests driving the charter binary through piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn charter() -> Command {
    let mut cmd = Command::cargo_bin("charter").expect("binary builds");
    // Keep test runs hermetic: no credential, no colors.
    cmd.env_remove("GEMINI_API_KEY");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn help_describes_the_workshop() {
    Command::cargo_bin("charter")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("work plan"));
}

#[test]
fn quitting_at_the_welcome_screen_exits_cleanly() {
    charter()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Charter — Work-Plan Workshop"));
}

#[test]
fn session_opens_on_the_background_step() {
    charter()
        .write_stdin("\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Background and Mapping"));
}

#[test]
fn next_moves_to_the_swot_step() {
    charter()
        .write_stdin("\nnext\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SWOT Analysis"));
}

#[test]
fn goal_entry_and_listing() {
    charter()
        .write_stdin("\nnext\nnext\nnext\nadd Reduce wait times\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Reduce wait times"));
}

#[test]
fn advisory_without_credential_names_the_variable() {
    charter()
        .write_stdin("\nai\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn forward_jump_is_rejected() {
    charter()
        .write_stdin("\ngoto 5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn export_writes_the_workbook() {
    let dir = tempfile::tempdir().expect("temp dir");

    charter()
        .arg("--output-dir")
        .arg(dir.path())
        .write_stdin("\nexport\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workbook written"));

    assert!(dir.path().join("work-plan.xlsx").exists());
}

#[test]
fn doc_writes_the_printable_document() {
    let dir = tempfile::tempdir().expect("temp dir");

    charter()
        .arg("--output-dir")
        .arg(dir.path())
        .write_stdin("\nset Some background\ndoc\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document written"));

    let written = std::fs::read_to_string(dir.path().join("work-plan.md")).expect("doc readable");
    assert!(written.contains("Some background"));
}

#[test]
fn reflection_interstitial_shows_on_the_vision_step() {
    charter()
        .write_stdin("\nnext\nnext\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thinking about the future"))
        .stdout(predicate::str::contains("Type ok when you are done thinking."));
}
