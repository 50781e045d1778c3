use predicates::prelude::*;
use tempfile::tempdir;

use crate::cli::support::{trailblazer, write_world, CORRIDOR_MAZE};

#[test]
fn test_unknown_vertex_exit_code() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "maze.txt", CORRIDOR_MAZE);

    trailblazer()
        .arg("path")
        .arg(&world)
        .args(["r0c0", "r9c9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: r9c9"));
}

#[test]
fn test_unknown_vertex_json_envelope() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "maze.txt", CORRIDOR_MAZE);

    let output = trailblazer()
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["nowhere", "r0c0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_vertex");
    assert_eq!(json["error"]["vertex"], "nowhere");
}

#[test]
fn test_malformed_world_reports_line() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "bad.txt", "maze\n2 2\n1 1\n1 7\n");

    trailblazer()
        .arg("mst")
        .arg(&world)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 4"));
}

#[test]
fn test_missing_world_file() {
    trailblazer()
        .args(["mst", "/no/such/world.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: "));
}

#[test]
fn test_quiet_suppresses_error_text() {
    trailblazer()
        .args(["--quiet", "mst", "/no/such/world.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_usage_error_json_envelope() {
    let output = trailblazer()
        .args(["--format", "json", "path", "only-one-arg"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_algorithm_rejected() {
    trailblazer()
        .args(["path", "w.txt", "a", "b", "--algorithm", "greedy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm: greedy"));
}

#[test]
fn test_usage_error_json_envelope_equals_form() {
    let output = trailblazer()
        .args(["--format=json", "mst"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_help_with_json_format_prints_help() {
    trailblazer()
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_usage_error_human_uses_clap_output() {
    trailblazer()
        .args(["path", "only-one-arg"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("Usage:"));
}
