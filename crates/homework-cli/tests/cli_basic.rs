//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_homework-cli"))
        .args(args)
        .env("HOMEWORK_TRACKER_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn add(home: &Path, name: &str, class: &str, due: &str, priority: &str, difficulty: &str) {
    let (code, stdout, stderr) = run_cli(
        home,
        &[
            "assignment", "add", name, "--class", class, "--due", due, "--priority", priority,
            "--difficulty", difficulty,
        ],
    );
    assert_eq!(code, 0, "add failed: {stderr}");
    assert!(stdout.contains("Assignment created:"));
}

#[test]
fn test_assignment_add_and_list_json() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Essay", "English", "2099-01-10 12:00", "High", "6");

    let (code, stdout, _) = run_cli(home.path(), &["assignment", "list", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["class"], "English");
    assert_eq!(items[0]["due_date"], "2099-01-10 12:00:00");
}

#[test]
fn test_assignment_add_rejects_bad_difficulty() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &[
            "assignment", "add", "Quiz", "--class", "Math", "--due", "2099-01-10 12:00",
            "--difficulty", "12",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Difficulty must be an integer between 1 and 10"));
}

#[test]
fn test_complete_hides_from_default_list() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Lab", "Science", "2099-02-01 09:00", "Low", "3");

    let (code, stdout, _) = run_cli(home.path(), &["assignment", "complete", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("updated"));

    let (_, stdout, _) = run_cli(home.path(), &["assignment", "list"]);
    assert!(stdout.contains("No assignments."));

    let (_, stdout, _) = run_cli(home.path(), &["assignment", "list", "--all"]);
    assert!(stdout.contains("#1 Lab (Science)"));
}

#[test]
fn test_schedule_without_assignments() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["advise", "schedule"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "No assignments to schedule!");
}

#[test]
fn test_schedule_json_ranks_high_first() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Later", "History", "2099-03-01 09:00", "Low", "2");
    add(home.path(), "First", "Math", "2099-03-05 09:00", "High", "4");

    let (code, stdout, _) = run_cli(home.path(), &["advise", "schedule", "--json"]);
    assert_eq!(code, 0);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries[0]["name"], "First");
    assert_eq!(entries[1]["name"], "Later");
}

#[test]
fn test_tips_are_reproducible_with_seed() {
    let home = tempfile::tempdir().unwrap();
    add(home.path(), "Proofs", "Math", "2099-03-01 09:00", "High", "9");

    let (_, first, _) = run_cli(home.path(), &["advise", "tips", "1", "--seed", "5"]);
    let (_, second, _) = run_cli(home.path(), &["advise", "tips", "1", "--seed", "5"]);
    assert_eq!(first, second);
    assert!(first.contains("high-priority assignment"));

    let (_, missing, _) = run_cli(home.path(), &["advise", "tips", "42"]);
    assert!(missing.contains("No specific assignment provided"));
}

#[test]
fn test_config_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "tips.seed", "9"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "tips.seed"]);
    assert_eq!(stdout.trim(), "9");

    let (code, _, _) = run_cli(home.path(), &["config", "get", "ui.nope"]);
    assert_ne!(code, 0);
}
