use std::cell::Cell;
use std::fmt;

use serde::Serialize;

use super::Graph;

/// Stable handle to a vertex inside one `Graph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle to an edge inside one `Graph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Visualization annotation attached to each vertex.
///
/// Searches paint vertices yellow when discovered, green when visited,
/// and gray when DFS abandons them while backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Uncolored,
    White,
    Gray,
    Yellow,
    Green,
    Red,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Uncolored,
        Color::White,
        Color::Gray,
        Color::Yellow,
        Color::Green,
        Color::Red,
    ];

    /// RGB multipliers used when drawing a vertex in this color
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Uncolored => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Gray => (192, 192, 192),
            Color::Yellow => (255, 255, 0),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
        }
    }

    /// `#rrggbb` form of `rgb()`
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Uncolored => "uncolored",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Red => "red",
        };
        f.write_str(name)
    }
}

/// A named vertex plus its transient search annotations.
///
/// The annotations live in cells so engines can update them through a
/// shared `&Graph`. This makes `Graph` `!Sync`: concurrent searches over
/// one graph need their own copy.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    color: Cell<Color>,
    cost: Cell<f64>,
}

impl Vertex {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            color: Cell::new(Color::Uncolored),
            cost: Cell::new(f64::INFINITY),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Last tentative distance written by a weighted search (`+inf` if none)
    pub fn cost(&self) -> f64 {
        self.cost.get()
    }

    pub(crate) fn set_color(&self, color: Color) {
        self.color.set(color);
    }

    pub(crate) fn set_cost(&self, cost: f64) {
        self.cost.set(cost);
    }
}

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub weight: f64,
}

/// Ordered vertex sequence from search start to goal.
///
/// An empty path means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<VertexId>);

impl Path {
    pub fn empty() -> Self {
        Path(Vec::new())
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of hops; zero for both the empty and the single-vertex path
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<VertexId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<VertexId> {
        self.0.last().copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.0.contains(&vertex)
    }

    /// Sum of edge weights along the path.
    ///
    /// `None` for an empty path or when two consecutive vertices are not
    /// joined by an edge in `graph`.
    pub fn cost(&self, graph: &Graph) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        self.0.windows(2).try_fold(0.0, |total, pair| {
            graph.edge(pair[0], pair[1]).map(|edge| total + edge.weight)
        })
    }

    pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.0.iter().map(|&v| graph.name(v)).collect()
    }
}

impl From<Vec<VertexId>> for Path {
    fn from(vertices: Vec<VertexId>) -> Self {
        Path(vertices)
    }
}

/// Edges accepted by a minimum spanning tree (or forest) construction,
/// in acceptance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<EdgeId>,
}

impl SpanningForest {
    pub(crate) fn push(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    pub fn total_weight(&self, graph: &Graph) -> f64 {
        self.edges.iter().map(|&e| graph.edge_data(e).weight).sum()
    }
}
