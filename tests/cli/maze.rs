use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::cli::support::{stdout_json, trailblazer};

#[test]
fn test_maze_to_stdout_is_seeded() {
    let first = trailblazer()
        .args(["maze", "--size", "tiny", "--seed", "17"])
        .output()
        .unwrap();
    let second = trailblazer()
        .args(["maze", "--size", "tiny", "--seed", "17"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.starts_with("maze\n7 7\n"));
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn test_maze_output_file_is_solvable() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("generated.txt");

    trailblazer()
        .args(["maze", "--size", "small", "--seed", "3", "--output"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote small maze (11x11)"));

    assert!(fs::read_to_string(&file).unwrap().starts_with("maze\n11 11\n"));

    trailblazer()
        .args(["path"])
        .arg(&file)
        .args(["0,0", "10,10", "--algorithm", "astar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("r00c00 -> "));
}

#[test]
fn test_maze_json_output() {
    let output = trailblazer()
        .args(["--format", "json", "maze", "-s", "tiny", "--seed", "1"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["size"], "tiny");
    assert_eq!(json["seed"], 1);
    assert_eq!(json["rows"], 7);
    assert!(json["world"].as_str().unwrap().starts_with("maze\n"));
}

#[test]
fn test_maze_size_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("trailblazer.toml"),
        "[maze]\nsize = \"tiny\"\nseed = 99\n",
    )
    .unwrap();

    let output = trailblazer()
        .current_dir(dir.path())
        .args(["--format", "json", "maze"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["size"], "tiny");
    assert_eq!(json["seed"], 99);
}

#[test]
fn test_maze_rejects_unknown_size() {
    trailblazer()
        .args(["maze", "--size", "colossal"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("colossal"));
}
