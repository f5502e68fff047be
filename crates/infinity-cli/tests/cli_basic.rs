//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary HOME, so the
//! config file and database start empty.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command with `home` as HOME and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_infinity"))
        .args(args)
        .env("HOME", home)
        .env_remove("INFINITY_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn signed_in() -> TempDir {
    let home = TempDir::new().unwrap();
    run_ok(home.path(), &["login", "learner@example.com"]);
    home
}

#[test]
fn test_commands_require_a_user() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "list"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("not signed in"));
}

#[test]
fn test_login_rejects_blank_email() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(home.path(), &["login", "  "]);
    assert_eq!(code, 1);
}

#[test]
fn test_task_add_and_list_json() {
    let home = signed_in();
    let out = run_ok(
        home.path(),
        &["task", "add", "Read chapter 4", "--subject", "History", "--important"],
    );
    assert!(out.contains("Task created:"));

    let out = run_ok(home.path(), &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"], "Read chapter 4");
    assert_eq!(tasks[0]["subject"], "History");
    assert_eq!(tasks[0]["isImportant"], true);
}

#[test]
fn test_task_done_awards_xp() {
    let home = signed_in();
    run_ok(home.path(), &["task", "add", "Quiz"]);
    let out = run_ok(home.path(), &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    let out = run_ok(home.path(), &["task", "done", &id]);
    assert!(out.contains("Task completed:"));
    let out = run_ok(home.path(), &["profile"]);
    assert!(out.contains("XP:          50"));

    let (_, _, code) = run_cli(home.path(), &["task", "done", "no-such-id"]);
    assert_eq!(code, 1);
}

#[test]
fn test_session_log_feeds_stats() {
    let home = signed_in();
    let (_, stderr, code) = run_cli(
        home.path(),
        &["session", "log", "30", "--subject", "Math"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("Streak Extended!"));

    let out = run_ok(home.path(), &["stats", "today"]);
    let today: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(today["studyTimeTodaySecs"], 1800);
    assert_eq!(today["goalProgressPct"], 50.0);

    let out = run_ok(home.path(), &["stats", "streak"]);
    let streak: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(streak["current"], 1);

    let out = run_ok(home.path(), &["stats", "week"]);
    let week: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(week.as_array().unwrap().len(), 7);
}

#[test]
fn test_goal_and_sound() {
    let home = signed_in();
    run_ok(home.path(), &["goal", "2"]);
    let out = run_ok(home.path(), &["profile"]);
    assert!(out.contains("Daily goal:  2.0 h"));

    let out = run_ok(home.path(), &["sound", "--volume", "1.7", "--mute"]);
    let sound: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(sound["volume"], 1.0);
    assert_eq!(sound["isMuted"], true);
}

#[test]
fn test_config_get_set() {
    let home = TempDir::new().unwrap();
    let out = run_ok(home.path(), &["config", "get", "assistant.model"]);
    assert_eq!(out.trim(), "gemini-2.5-flash");

    run_ok(home.path(), &["config", "set", "assistant.timeout_secs", "5"]);
    let out = run_ok(home.path(), &["config", "get", "assistant.timeout_secs"]);
    assert_eq!(out.trim(), "5");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "assistant.nope", "1"]);
    assert_eq!(code, 1);
}

#[test]
fn test_quote_falls_back_when_service_unreachable() {
    let home = TempDir::new().unwrap();
    run_ok(
        home.path(),
        &["config", "set", "assistant.endpoint", "http://127.0.0.1:9"],
    );
    let output = Command::new(env!("CARGO_BIN_EXE_infinity"))
        .arg("quote")
        .env("HOME", home.path())
        .env("GEMINI_API_KEY", "test-key")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "The secret of getting ahead is getting started. – Mark Twain"
    );
}
