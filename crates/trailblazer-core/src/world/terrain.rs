//! Terrain worlds: altitude fields where climbing is expensive

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::world::grid::{Grid, GridLocation};
use crate::world::{World, WorldKind};

#[derive(Debug, Clone)]
pub struct TerrainWorld {
    grid: Grid,
    graph: Graph,
    locations: Vec<GridLocation>,
    penalty: f64,
}

impl TerrainWorld {
    /// Build the graph for a grid of altitudes in `[0, 1]`
    pub fn from_grid(grid: Grid, penalty: f64) -> Self {
        let (graph, locations) = grid.to_graph(|from, to| terrain_cost(&grid, penalty, from, to));
        Self {
            grid,
            graph,
            locations,
            penalty,
        }
    }

    pub fn parse(text: &str, penalty: f64) -> Result<Self> {
        let grid = Grid::parse(text, WorldKind::Terrain.as_str(), 0.0, 1.0)?;
        Ok(Self::from_grid(grid, penalty))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn location(&self, vertex: VertexId) -> GridLocation {
        self.locations[vertex.index()]
    }
}

/// Euclidean step length plus `penalty` per unit of altitude change
fn terrain_cost(grid: &Grid, penalty: f64, from: GridLocation, to: GridLocation) -> f64 {
    let (dr, dc) = from.delta(to);
    let distance = ((dr * dr + dc * dc) as f64).sqrt();
    distance + penalty * (grid.at(from) - grid.at(to)).abs()
}

impl World for TerrainWorld {
    fn kind(&self) -> WorldKind {
        WorldKind::Terrain
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn heuristic(&self, from: VertexId, to: VertexId) -> f64 {
        terrain_cost(&self.grid, self.penalty, self.location(from), self.location(to))
    }

    fn resolve(&self, spec: &str) -> Result<VertexId> {
        self.grid.resolve(&self.graph, spec)
    }

    fn to_text(&self) -> String {
        self.grid.to_text(WorldKind::Terrain.as_str())
    }
}
