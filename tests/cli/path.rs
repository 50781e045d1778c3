use predicates::prelude::*;
use tempfile::tempdir;

use crate::cli::support::{stdout_json, trailblazer, write_world, CORRIDOR_MAZE, TRIANGLE_MAP};

#[test]
fn test_path_human_output() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "maze.txt", CORRIDOR_MAZE);

    trailblazer()
        .arg("path")
        .arg(&world)
        .args(["r0c0", "r2c0", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("r0c0 -> r0c1"))
        .stdout(predicate::str::contains("-> r2c0\n"))
        .stdout(predicate::str::contains("Breadth-first search (11 vertices, cost 10)"))
        .stdout(predicate::str::contains("Visited: "));
}

#[test]
fn test_path_accepts_coordinates() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "maze.txt", CORRIDOR_MAZE);

    trailblazer()
        .arg("path")
        .arg(&world)
        .args(["0,0", "2,0", "-a", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r0c4 -> r1c4 -> r2c4"));
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    let output = trailblazer()
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C", "--algorithm", "dijkstra"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["world"], "map");
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["cost"], 7.0);
    assert!(json.get("trace").is_none());
}

#[test]
fn test_path_bfs_prefers_fewer_edges() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    let output = trailblazer()
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C", "--algorithm", "bfs"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["path"], serde_json::json!(["A", "C"]));
    assert_eq!(json["cost"], 10.0);
}

#[test]
fn test_path_not_found_is_success() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    trailblazer()
        .arg("path")
        .arg(&world)
        .args(["A", "Island"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to Island"));

    let output = trailblazer()
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "Island"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["cost"].is_null());
}

#[test]
fn test_path_trace_lists_transitions() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    trailblazer()
        .arg("path")
        .arg(&world)
        .args(["A", "C", "--algorithm", "dijkstra", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> yellow"))
        .stdout(predicate::str::contains("A -> green"));

    let output = trailblazer()
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C", "--trace", "--algorithm", "dfs"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let trace = json["trace"].as_array().unwrap();
    assert_eq!(trace[0]["vertex"], "A");
    assert_eq!(trace[0]["color"], "green");
}

#[test]
fn test_path_quiet_prints_only_route() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    trailblazer()
        .args(["--quiet", "path"])
        .arg(&world)
        .args(["A", "C", "-a", "astar"])
        .assert()
        .success()
        .stdout("A -> B -> C\n");
}
