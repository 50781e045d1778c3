use predicates::prelude::*;
use tempfile::tempdir;

use crate::cli::support::{stdout_json, trailblazer, write_world, TRIANGLE_MAP};

#[test]
fn test_mst_human_output() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    trailblazer()
        .arg("mst")
        .arg(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("A - B (3)"))
        .stdout(predicate::str::contains("B - C (4)"))
        .stdout(predicate::str::contains("A - C").not())
        .stdout(predicate::str::contains(
            "Total weight: 7 (2 edges, 2 components)",
        ));
}

#[test]
fn test_mst_json_output() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);

    let output = trailblazer()
        .args(["--format", "json", "mst"])
        .arg(&world)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["total_weight"], 7.0);
    assert_eq!(json["components"], 2);
    assert_eq!(json["edges"][0]["weight"], 3.0);
}
