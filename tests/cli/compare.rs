use predicates::prelude::*;
use tempfile::tempdir;

use crate::cli::support::{stdout_json, trailblazer, write_world, CORRIDOR_MAZE, TRIANGLE_MAP};

#[test]
fn test_compare_human_table() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "maze.txt", CORRIDOR_MAZE);

    trailblazer()
        .arg("compare")
        .arg(&world)
        .args(["0,0", "2,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm"))
        .stdout(predicate::str::is_match(r"(?m)^dfs\s+11\s+10\s.*\bno$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^astar\s+11\s+10\s.*\byes$").unwrap());
}

#[test]
fn test_compare_json() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    let output = trailblazer()
        .args(["--format", "json", "compare"])
        .arg(&world)
        .args(["A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    let algorithms: Vec<_> = rows.iter().map(|r| r["algorithm"].clone()).collect();
    assert_eq!(
        algorithms,
        vec!["dfs", "bfs", "dijkstra", "astar"]
            .into_iter()
            .map(serde_json::Value::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(rows[1]["cost"], 10.0);
    assert_eq!(rows[1]["optimal"], false);
    assert_eq!(rows[2]["optimal"], true);
    assert_eq!(rows[3]["optimal"], true);
    assert_eq!(rows[2]["cost"], 7.0);
    assert_eq!(rows[3]["cost"], 7.0);
}
