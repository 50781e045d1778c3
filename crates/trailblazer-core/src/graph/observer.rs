//! Synchronous notification of vertex color transitions
//!
//! Engines set the vertex color on the graph and then call the observer,
//! so a renderer can repaint, throttle, or ignore each step.

use crate::graph::types::{Color, VertexId};

pub trait SearchObserver {
    fn vertex_colored(&mut self, vertex: VertexId, color: Color);
}

impl<F> SearchObserver for F
where
    F: FnMut(VertexId, Color),
{
    fn vertex_colored(&mut self, vertex: VertexId, color: Color) {
        self(vertex, color)
    }
}

/// Observer that ignores every transition
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn vertex_colored(&mut self, _vertex: VertexId, _color: Color) {}
}

/// Counts transitions into each color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTally {
    counts: [usize; Color::ALL.len()],
}

impl ColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, color: Color) -> usize {
        self.counts[color.slot()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl SearchObserver for ColorTally {
    fn vertex_colored(&mut self, _vertex: VertexId, color: Color) {
        self.counts[color.slot()] += 1;
    }
}
