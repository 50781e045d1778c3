use std::path::PathBuf;

use clap::Args;
use trailblazer_core::graph::Algorithm;
use trailblazer_core::world::WorldSize;

use super::parse::{parse_algorithm, parse_world_size};

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// World file (maze, terrain, or map)
    pub world: PathBuf,

    /// Start vertex: a name, or `row,col` on grid worlds
    pub from: String,

    /// Goal vertex: a name, or `row,col` on grid worlds
    pub to: String,

    /// Search algorithm (dfs, bfs, dijkstra, astar) [default: from config]
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Print every vertex color transition
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MstArgs {
    /// World file (maze, terrain, or map)
    pub world: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Maze size (tiny, small, medium, large, huge) [default: from config]
    #[arg(long, short, value_parser = parse_world_size)]
    pub size: Option<WorldSize>,

    /// Random seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the maze to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// World file (maze, terrain, or map)
    pub world: PathBuf,

    /// Start vertex
    pub from: String,

    /// Goal vertex
    pub to: String,
}
