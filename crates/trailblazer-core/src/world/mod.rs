//! Worlds: the concrete graphs searches run over
//!
//! Three kinds are supported:
//!
//! - **maze**: a grid of walls and floors, moves are orthogonal and cost 1
//! - **terrain**: a height field, moves go to all eight neighbors and cost
//!   distance plus a penalty for altitude change
//! - **map**: named vertices with coordinates and explicit weighted edges
//!
//! Every world file starts with a type token naming its kind.

pub mod grid;
pub mod map;
pub mod maze;
pub mod terrain;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TrailblazerConfig;
use crate::error::{Result, TrailblazerError};
use crate::graph::{Graph, Heuristic, VertexId};

pub use grid::{Grid, GridLocation};
pub use map::MapWorld;
pub use maze::MazeWorld;
pub use terrain::TerrainWorld;

/// Which kind of world a graph was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldKind {
    Maze,
    Terrain,
    Map,
}

impl WorldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorldKind::Maze => "maze",
            WorldKind::Terrain => "terrain",
            WorldKind::Map => "map",
        }
    }
}

impl fmt::Display for WorldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset dimensions for generated worlds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldSize {
    Tiny,
    #[default]
    Small,
    Medium,
    Large,
    Huge,
}

impl WorldSize {
    pub const ALL: [WorldSize; 5] = [
        WorldSize::Tiny,
        WorldSize::Small,
        WorldSize::Medium,
        WorldSize::Large,
        WorldSize::Huge,
    ];

    /// Side length of a maze generated at this size
    pub fn maze_rows(self) -> usize {
        match self {
            WorldSize::Tiny => 6,
            WorldSize::Small => 11,
            WorldSize::Medium => 31,
            WorldSize::Large => 81,
            WorldSize::Huge => 161,
        }
    }

    /// Side length of a terrain generated at this size
    pub fn terrain_rows(self) -> usize {
        match self {
            WorldSize::Tiny => 10,
            WorldSize::Small => 33,
            WorldSize::Medium => 65,
            WorldSize::Large => 129,
            WorldSize::Huge => 257,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorldSize::Tiny => "tiny",
            WorldSize::Small => "small",
            WorldSize::Medium => "medium",
            WorldSize::Large => "large",
            WorldSize::Huge => "huge",
        }
    }
}

impl fmt::Display for WorldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldSize {
    type Err = TrailblazerError;

    fn from_str(s: &str) -> Result<Self> {
        WorldSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrailblazerError::invalid_value("world size", s))
    }
}

/// A loaded world: a graph plus the geometry needed to guide A*
pub trait World {
    fn kind(&self) -> WorldKind;

    fn graph(&self) -> &Graph;

    /// Lower bound on the cost of travelling between two vertices
    fn heuristic(&self, from: VertexId, to: VertexId) -> f64;

    /// Look up a vertex by its name
    fn resolve(&self, name: &str) -> Result<VertexId> {
        self.graph()
            .vertex(name)
            .ok_or_else(|| TrailblazerError::unknown_vertex(name))
    }

    /// Render the world in its file format
    fn to_text(&self) -> String;
}

/// Adapts a world's estimate to the `Heuristic` the searches take
#[derive(Clone, Copy)]
pub struct WorldHeuristic<'a>(pub &'a dyn World);

impl Heuristic for WorldHeuristic<'_> {
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        self.0.heuristic(from, to)
    }
}

/// Parse a world file, dispatching on its leading type token
pub fn parse_world(text: &str, config: &TrailblazerConfig) -> Result<Box<dyn World>> {
    let Some(kind) = text.split_whitespace().next() else {
        crate::bail_world!(1, "empty world file");
    };

    let world: Box<dyn World> = match kind {
        "maze" => Box::new(MazeWorld::parse(text)?),
        "terrain" => Box::new(TerrainWorld::parse(
            text,
            config.terrain.altitude_penalty,
        )?),
        "IMAGE" => Box::new(MapWorld::parse(
            text,
            config.map.straight_line_heuristic,
        )?),
        other => crate::bail_world!(1, "unrecognized world type '{}'", other),
    };

    debug!(
        kind = %world.kind(),
        vertices = world.graph().vertex_count(),
        edges = world.graph().edge_count(),
        "world parsed"
    );
    Ok(world)
}

/// Read and parse a world file from disk
pub fn load_world(path: &Path, config: &TrailblazerConfig) -> Result<Box<dyn World>> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading world");
    parse_world(&text, config)
}
