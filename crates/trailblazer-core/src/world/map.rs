//! Map worlds: named places with coordinates, joined by explicit roads

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, TrailblazerError};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::world::{World, WorldKind};

/// Pixel position of a map vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    pub x: i64,
    pub y: i64,
}

impl MapPoint {
    pub fn distance(self, other: MapPoint) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone)]
pub struct MapWorld {
    graph: Graph,
    points: Vec<MapPoint>,
    image: String,
    width: u32,
    height: u32,
    /// Directedness of each edge as declared, keyed by edge index
    directed: Vec<bool>,
    straight_line: bool,
}

/// Section of the map file the parser is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Vertices,
    Edges,
}

impl MapWorld {
    /// Parse a map file:
    ///
    /// ```text
    /// IMAGE
    /// stanford.png
    /// 600
    /// 400
    /// VERTICES
    /// Gates;120;80
    /// Main Quad;300;210
    /// EDGES
    /// Gates;Main Quad;230
    /// ```
    ///
    /// Edges are undirected unless a fourth `true` field is given.
    /// `ARCS` is accepted in place of `EDGES`. The line after the height is
    /// the section marker and is skipped whatever it says. Vertex lines with
    /// fewer than three fields are skipped; an edge line with fewer than
    /// three fields ends the file. Blank lines are ignored everywhere.
    pub fn parse(text: &str, straight_line: bool) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let mut header = |what: &'static str| {
            lines
                .next()
                .ok_or_else(|| TrailblazerError::invalid_world(1, format!("missing {what}")))
        };

        let (line, tag) = header("IMAGE header")?;
        if tag != "IMAGE" {
            crate::bail_world!(line, "map file must start with IMAGE");
        }
        let (_, image) = header("image file name")?;
        let image = image.to_string();
        let width = parse_dimension(header("image width")?, "width")?;
        let height = parse_dimension(header("image height")?, "height")?;
        header("VERTICES section")?;

        let mut world = MapWorld {
            graph: Graph::new(),
            points: Vec::new(),
            image,
            width,
            height,
            directed: Vec::new(),
            straight_line,
        };

        let mut section = Section::Vertices;
        for (line, text) in lines {
            let fields: Vec<&str> = text.split(';').map(str::trim).collect();
            match section {
                Section::Vertices if matches!(fields[0], "EDGES" | "ARCS") => {
                    section = Section::Edges;
                }
                Section::Vertices if fields.len() < 3 => continue,
                Section::Vertices => world.parse_vertex(line, &fields)?,
                Section::Edges if fields.len() < 3 => break,
                Section::Edges => world.parse_edge(line, &fields)?,
            }
        }

        Ok(world)
    }

    fn parse_vertex(&mut self, line: usize, fields: &[&str]) -> Result<()> {
        let &[name, x, y, ..] = fields else {
            crate::bail_world!(line, "vertex must be 'name;x;y'");
        };
        if self.graph.vertex(name).is_some() {
            crate::bail_world!(line, "duplicate vertex '{}'", name);
        }
        let coord = |value: &str| -> Result<i64> {
            value
                .parse::<i64>()
                .ok()
                .filter(|v| *v >= 0)
                .ok_or_else(|| {
                    TrailblazerError::invalid_world(line, format!("invalid coordinate '{value}'"))
                })
        };
        let point = MapPoint {
            x: coord(x)?,
            y: coord(y)?,
        };
        self.graph.add_vertex(name);
        self.points.push(point);
        Ok(())
    }

    fn parse_edge(&mut self, line: usize, fields: &[&str]) -> Result<()> {
        let (from, to, weight, directed) = match fields {
            &[from, to, weight] => (from, to, weight, "false"),
            &[from, to, weight, directed, ..] => (from, to, weight, directed),
            _ => crate::bail_world!(line, "edge must be 'from;to;weight[;directed]'"),
        };
        let Some(start) = self.graph.vertex(from) else {
            crate::bail_world!(line, "edge references unknown vertex '{}'", from);
        };
        let Some(end) = self.graph.vertex(to) else {
            crate::bail_world!(line, "edge references unknown vertex '{}'", to);
        };
        let weight: f64 = weight
            .parse()
            .ok()
            .filter(|w: &f64| w.is_finite())
            .ok_or_else(|| TrailblazerError::invalid_world(line, format!("invalid weight '{weight}'")))?;
        if weight < 0.0 {
            crate::bail_world!(line, "negative weight {} on edge {} - {}", weight, from, to);
        }
        let directed = parse_flag(directed).ok_or_else(|| {
            TrailblazerError::invalid_world(line, format!("invalid directed flag '{directed}'"))
        })?;

        let forward = self.graph.connect(start, end, weight);
        self.record(forward.index(), directed);
        if !directed {
            let backward = self.graph.connect(end, start, weight);
            self.record(backward.index(), false);
        }
        Ok(())
    }

    fn record(&mut self, edge: usize, directed: bool) {
        if edge == self.directed.len() {
            self.directed.push(directed);
        } else {
            self.directed[edge] = directed;
        }
    }

    /// The reverse half of an undirected road, when `id` is one half and
    /// the two still carry the same weight
    fn undirected_partner(&self, id: EdgeId) -> Option<EdgeId> {
        let edge = self.graph.edge_data(id);
        let reverse = self.graph.edge_id(edge.end, edge.start)?;
        let both_undirected = !self.directed[id.index()] && !self.directed[reverse.index()];
        (both_undirected && self.graph.edge_data(reverse).weight == edge.weight).then_some(reverse)
    }

    pub fn point(&self, vertex: VertexId) -> MapPoint {
        self.points[vertex.index()]
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn uses_straight_line(&self) -> bool {
        self.straight_line
    }
}

fn parse_dimension((line, value): (usize, &str), what: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| TrailblazerError::invalid_world(line, format!("invalid image {what} '{value}'")))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl World for MapWorld {
    fn kind(&self) -> WorldKind {
        WorldKind::Map
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Straight-line pixel distance when enabled, zero otherwise.
    ///
    /// Road weights are not required to relate to pixel distance, so the
    /// straight-line estimate is only admissible for maps drawn to scale.
    fn heuristic(&self, from: VertexId, to: VertexId) -> f64 {
        if self.straight_line {
            self.point(from).distance(self.point(to))
        } else {
            0.0
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!(
            "IMAGE\n{}\n{}\n{}\nVERTICES\n",
            self.image, self.width, self.height
        );
        for v in self.graph.vertices() {
            let p = self.point(v);
            let _ = writeln!(out, "{};{};{}", self.graph.name(v), p.x, p.y);
        }
        out.push_str("EDGES\n");
        for id in self.graph.edge_ids() {
            let edge = self.graph.edge_data(id);
            let partner = self.undirected_partner(id);
            if partner.is_some_and(|r| r.index() < id.index()) {
                continue;
            }
            let _ = writeln!(
                out,
                "{};{};{}{}",
                self.graph.name(edge.start),
                self.graph.name(edge.end),
                edge.weight,
                if partner.is_some() { "" } else { ";true" }
            );
        }
        out
    }
}
