use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for trailblazer, isolated from any user config
pub fn trailblazer() -> Command {
    let mut cmd = cargo_bin_cmd!("trailblazer");
    cmd.env("TRAILBLAZER_CONFIG_DIR", "/nonexistent/trailblazer-test-config")
        .env_remove("TRAILBLAZER_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("TRAILBLAZER_LOG");
    cmd
}

/// Three-row maze with a single winding route from r0c0 to r2c0
pub const CORRIDOR_MAZE: &str = "\
maze
3 5
1 1 1 1 1
0 0 0 0 1
1 1 1 1 1
";

/// Two cities joined directly and through a cheaper detour
pub const TRIANGLE_MAP: &str = "\
IMAGE
triangle.png
100
100
VERTICES
A;0;0
B;50;0
C;100;0
Island;0;90
EDGES
A;C;10
A;B;3
B;C;4
";

/// Write a world file into `dir` and return its path
pub fn write_world(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
