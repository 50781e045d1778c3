use std::fs;

use tempfile::tempdir;

use crate::cli::support::{stdout_json, trailblazer, write_world, TRIANGLE_MAP};

#[test]
fn test_default_algorithm_from_local_config() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);
    fs::write(
        dir.path().join("trailblazer.toml"),
        "[search]\nalgorithm = \"bfs\"\n",
    )
    .unwrap();

    let output = trailblazer()
        .current_dir(dir.path())
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["path"], serde_json::json!(["A", "C"]));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[search]\nalgorithm = \"dfs\"\n").unwrap();

    let output = trailblazer()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C"])
        .output()
        .unwrap();

    assert_eq!(stdout_json(&output)["algorithm"], "dfs");
}

#[test]
fn test_user_config_dir() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);
    let config_dir = dir.path().join("user-config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[search]\nalgorithm = \"dijkstra\"\n",
    )
    .unwrap();

    let output = trailblazer()
        .env("TRAILBLAZER_CONFIG_DIR", &config_dir)
        .args(["--format", "json", "path"])
        .arg(&world)
        .args(["A", "C"])
        .output()
        .unwrap();

    assert_eq!(stdout_json(&output)["algorithm"], "dijkstra");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let world = write_world(dir.path(), "map.txt", TRIANGLE_MAP);
    fs::write(
        dir.path().join("trailblazer.toml"),
        "[terrain]\naltitude_penalty = -1.0\n",
    )
    .unwrap();

    trailblazer()
        .current_dir(dir.path())
        .arg("path")
        .arg(&world)
        .args(["A", "C"])
        .assert()
        .code(2);
}
