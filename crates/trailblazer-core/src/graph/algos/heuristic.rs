use crate::graph::types::VertexId;

/// Estimate of the remaining cost from one vertex to another.
///
/// A* only returns optimal paths when the estimate never exceeds the true
/// remaining cost. This is not checked.
pub trait Heuristic {
    fn estimate(&self, from: VertexId, to: VertexId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn estimate(&self, from: VertexId, to: VertexId) -> f64 {
        self(from, to)
    }
}

/// Always estimates zero; turns A* into Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: VertexId, _to: VertexId) -> f64 {
        0.0
    }
}
