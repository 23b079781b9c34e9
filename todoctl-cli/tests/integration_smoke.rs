//! Smoke tests to verify command wiring and startup failure handling

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SQLite database file"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("database file to create"));
}

#[test]
fn test_serve_missing_database_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("missing.db");

    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.env_remove("TODOCTL_BIND")
        .arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .arg("--db-path")
        .arg(&db_path);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Failed to connect to database"));
    assert!(!db_path.exists());
}

#[test]
fn test_init_db_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("todos.db");

    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("init-db").arg("--db-path").arg(&db_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized database"));
    assert!(db_path.exists());
}
