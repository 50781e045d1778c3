//! Arena-backed directed weighted graph
//!
//! Vertices and edges are addressed by `VertexId` / `EdgeId` handles that
//! stay valid for the life of the graph (`clear_edges` invalidates edge
//! handles only). Per-vertex user data belongs in side tables keyed by
//! `VertexId`, owned by whoever built the graph.

use std::collections::HashMap;

use crate::error::{Result, TrailblazerError};
use crate::graph::types::{Color, Edge, EdgeId, Vertex, VertexId};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    by_name: HashMap<String, VertexId>,
    edges: Vec<Edge>,
    by_endpoints: HashMap<(VertexId, VertexId), EdgeId>,
    /// Outgoing edges per vertex, in insertion order
    outgoing: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, returning the existing handle if the name is taken
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.by_name.insert(name.clone(), id);
        self.vertices.push(Vertex::new(name));
        self.outgoing.push(Vec::new());
        id
    }

    /// Add an edge by vertex name; undirected edges are stored as two
    /// directed edges.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, directed: bool) -> Result<()> {
        let start = self
            .vertex(from)
            .ok_or_else(|| TrailblazerError::unknown_vertex(from))?;
        let end = self
            .vertex(to)
            .ok_or_else(|| TrailblazerError::unknown_vertex(to))?;

        self.connect(start, end, weight);
        if !directed {
            self.connect(end, start, weight);
        }
        Ok(())
    }

    /// Add a directed edge by handle.
    ///
    /// Re-adding an existing `(start, end)` pair replaces its weight in
    /// place; the edge keeps its handle and neighbor position.
    pub fn connect(&mut self, start: VertexId, end: VertexId, weight: f64) -> EdgeId {
        if let Some(&id) = self.by_endpoints.get(&(start, end)) {
            self.edges[id.0].weight = weight;
            return id;
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { start, end, weight });
        self.by_endpoints.insert((start, end), id);
        self.outgoing[start.0].push(id);
        id
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    pub fn vertex_data(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn name(&self, id: VertexId) -> &str {
        self.vertices[id.0].name()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Handles of the edges leaving `id`, in insertion order
    pub fn out_edge_ids(&self, id: VertexId) -> &[EdgeId] {
        &self.outgoing[id.0]
    }

    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing[id.0].iter().map(|&e| &self.edges[e.0])
    }

    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(id).map(|edge| edge.end)
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edge_id(from, to).map(|id| &self.edges[id.0])
    }

    pub fn edge_id(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.by_endpoints.get(&(from, to)).copied()
    }

    pub fn edge_data(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.vertex(from), self.vertex(to)) {
            (Some(start), Some(end)) => self.by_endpoints.contains_key(&(start, end)),
            _ => false,
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove every edge, keeping the vertices
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.by_endpoints.clear();
        for out in &mut self.outgoing {
            out.clear();
        }
    }

    pub fn set_color(&self, id: VertexId, color: Color) {
        self.vertices[id.0].set_color(color);
    }

    pub fn set_cost(&self, id: VertexId, cost: f64) {
        self.vertices[id.0].set_cost(cost);
    }

    /// Reset every vertex to uncolored with no recorded cost
    pub fn reset_annotations(&self) {
        for vertex in &self.vertices {
            vertex.set_color(Color::Uncolored);
            vertex.set_cost(f64::INFINITY);
        }
    }
}
