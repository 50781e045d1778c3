//! Graph algorithm implementations
//!
//! - `dfs`: depth-first search, first path found
//! - `bfs`: breadth-first search, fewest edges
//! - `dijkstra`: Dijkstra and A*, sharing one relaxation loop
//! - `kruskal`: minimum spanning tree / forest
//! - `shared`: path reconstruction and color notification

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod heuristic;
pub mod kruskal;
pub mod shared;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrailblazerError;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Path, VertexId};
use crate::graph::Graph;

pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use dijkstra::{a_star, dijkstra, shortest_path};
pub use heuristic::{Heuristic, ZeroHeuristic};
pub use kruskal::kruskal;

/// Path-finding algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    #[serde(alias = "a*", alias = "a-star")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dfs => "Depth-first search",
            Algorithm::Bfs => "Breadth-first search",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the returned path is guaranteed minimal in total weight
    /// (given non-negative weights and, for A*, an admissible heuristic)
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Run this algorithm. `heuristic` is only consulted by A*.
    pub fn find_path(
        self,
        graph: &Graph,
        start: VertexId,
        end: VertexId,
        heuristic: &dyn Heuristic,
        observer: &mut dyn SearchObserver,
    ) -> Path {
        match self {
            Algorithm::Dfs => depth_first_search(graph, start, end, observer),
            Algorithm::Bfs => breadth_first_search(graph, start, end, observer),
            Algorithm::Dijkstra => dijkstra(graph, start, end, observer),
            Algorithm::AStar => a_star(graph, start, end, heuristic, observer),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TrailblazerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            other => Err(TrailblazerError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        };
        f.write_str(name)
    }
}
