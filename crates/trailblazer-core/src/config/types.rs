//! Configuration type definitions

use crate::graph::Algorithm;
use crate::world::WorldSize;
use serde::{Deserialize, Serialize};

/// Default penalty applied per unit of altitude change on terrain worlds
pub const DEFAULT_ALTITUDE_PENALTY: f64 = 100.0;

/// Top-level trailblazer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailblazerConfig {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Terrain world cost model
    #[serde(default)]
    pub terrain: TerrainConfig,

    /// Map world options
    #[serde(default)]
    pub map: MapConfig,

    /// Random maze generation
    #[serde(default)]
    pub maze: MazeConfig,
}

/// Search defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used by `path` when `--algorithm` is not given
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
        }
    }
}

fn default_algorithm() -> Algorithm {
    Algorithm::AStar
}

/// Terrain world cost model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Cost added per unit of absolute altitude difference
    #[serde(default = "default_altitude_penalty")]
    pub altitude_penalty: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            altitude_penalty: default_altitude_penalty(),
        }
    }
}

fn default_altitude_penalty() -> f64 {
    DEFAULT_ALTITUDE_PENALTY
}

/// Map world options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Use straight-line coordinate distance as the A* heuristic.
    /// Only admissible when edge weights are at least the drawn distance.
    #[serde(default)]
    pub straight_line_heuristic: bool,
}

/// Random maze generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Default maze size
    #[serde(default)]
    pub size: WorldSize,

    /// Fixed seed for reproducible mazes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
