//! Maze worlds: floors and walls on a grid, orthogonal moves of cost 1

use tracing::debug;

use crate::error::Result;
use crate::graph::{kruskal, Graph, NoopObserver, VertexId};
use crate::world::grid::{Grid, GridLocation};
use crate::world::{World, WorldKind, WorldSize};

pub const WALL: f64 = 0.0;
pub const FLOOR: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct MazeWorld {
    grid: Grid,
    graph: Graph,
    locations: Vec<GridLocation>,
}

impl MazeWorld {
    /// Build the graph for an existing grid. A cell is a wall when its
    /// value is exactly zero.
    pub fn from_grid(grid: Grid) -> Self {
        let (graph, locations) = grid.to_graph(|from, to| maze_cost(&grid, from, to));
        Self {
            grid,
            graph,
            locations,
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let grid = Grid::parse(text, WorldKind::Maze.as_str(), WALL, FLOOR)?;
        Ok(Self::from_grid(grid))
    }

    /// Generate a perfect maze: exactly one route between any two floors.
    ///
    /// A lattice of rooms is joined by randomly weighted corridors, the
    /// minimum spanning tree of those corridors is kept, and the result is
    /// drawn onto a grid with walls between rooms.
    pub fn generate(size: WorldSize, rng: &mut fastrand::Rng) -> Self {
        let rooms = size.maze_rows() / 2 + 1;
        let lattice = Grid::new(rooms, rooms, FLOOR);
        let (mut graph, locations) = lattice.to_graph(|from, to| maze_cost(&lattice, from, to));

        let corridors: Vec<_> = graph.edges().map(|e| (e.start, e.end)).collect();
        let max_weight = (corridors.len() as u64 * 1000).max(1);
        for (start, end) in corridors {
            graph.connect(start, end, rng.u64(1..=max_weight) as f64);
        }
        let tree = kruskal(&graph, &mut NoopObserver);

        let side = rooms * 2 - 1;
        let mut grid = Grid::new(side, side, WALL);
        for row in 0..rooms {
            for col in 0..rooms {
                grid.set(row * 2, col * 2, FLOOR);
            }
        }
        for &id in tree.edges() {
            let edge = graph.edge_data(id);
            let a = locations[edge.start.index()];
            let b = locations[edge.end.index()];
            grid.set(a.row + b.row, a.col + b.col, FLOOR);
        }

        debug!(size = %size, rooms, corridors = tree.len(), "maze generated");
        Self::from_grid(grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn location(&self, vertex: VertexId) -> GridLocation {
        self.locations[vertex.index()]
    }

    pub fn is_floor(&self, loc: GridLocation) -> bool {
        self.grid.at(loc) != WALL
    }
}

fn maze_cost(grid: &Grid, from: GridLocation, to: GridLocation) -> f64 {
    if grid.at(from) == WALL || grid.at(to) == WALL {
        return f64::INFINITY;
    }
    match from.delta(to) {
        (0, 1) | (1, 0) => 1.0,
        _ => f64::INFINITY,
    }
}

impl World for MazeWorld {
    fn kind(&self) -> WorldKind {
        WorldKind::Maze
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Manhattan distance
    fn heuristic(&self, from: VertexId, to: VertexId) -> f64 {
        let (dr, dc) = self.location(from).delta(self.location(to));
        (dr + dc) as f64
    }

    fn resolve(&self, spec: &str) -> Result<VertexId> {
        self.grid.resolve(&self.graph, spec)
    }

    fn to_text(&self) -> String {
        self.grid.to_text(WorldKind::Maze.as_str())
    }
}
