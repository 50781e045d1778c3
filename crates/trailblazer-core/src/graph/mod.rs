//! Graph model and search algorithms
//!
//! Provides:
//! - An arena-backed weighted directed graph with per-vertex color/cost annotations
//! - DFS and BFS traversal, Dijkstra and A* shortest paths
//! - Kruskal minimum spanning trees over a union-find cluster structure
//! - A min-priority frontier shared by the weighted engines

pub mod algos;
pub mod cluster;
pub mod frontier;
pub mod model;
pub mod observer;
pub mod types;

pub use algos::{
    a_star, breadth_first_search, depth_first_search, dijkstra, kruskal, Algorithm, Heuristic,
    ZeroHeuristic,
};
pub use cluster::Clusters;
pub use frontier::Frontier;
pub use model::Graph;
pub use observer::{ColorTally, NoopObserver, SearchObserver};
pub use types::{Color, Edge, EdgeId, Path, SpanningForest, Vertex, VertexId};
