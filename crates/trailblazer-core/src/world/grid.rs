//! Rectangular cell grids and their conversion to graphs

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Result, TrailblazerError};
use crate::graph::{Graph, VertexId};

/// Largest row or column count accepted from a world file (exclusive)
pub const MAX_ROWS_COLS: usize = 400;

/// Logical cell position, attached to each grid vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridLocation {
    pub row: usize,
    pub col: usize,
}

impl GridLocation {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Absolute row and column offsets to `other`
    pub fn delta(self, other: GridLocation) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }
}

/// Row-major grid of cell values
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn at(&self, loc: GridLocation) -> f64 {
        self.get(loc.row, loc.col)
    }

    /// Vertex name for a cell, zero-padded to the digit count of the
    /// larger dimension: `r03c10`
    pub fn vertex_name(&self, row: usize, col: usize) -> String {
        let digits = count_digits(self.rows.max(self.cols));
        format!("r{row:0digits$}c{col:0digits$}")
    }

    /// Build a graph with one vertex per cell and an edge to each of the
    /// eight neighbors whose `cost` is finite.
    ///
    /// Returns the graph plus the location of every vertex, indexed by
    /// `VertexId::index()`.
    pub fn to_graph<F>(&self, cost: F) -> (Graph, Vec<GridLocation>)
    where
        F: Fn(GridLocation, GridLocation) -> f64,
    {
        let mut graph = Graph::new();
        let mut locations = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                graph.add_vertex(self.vertex_name(row, col));
                locations.push(GridLocation::new(row, col));
            }
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let from = GridLocation::new(row, col);
                for (nr, nc) in self.neighbors(row, col) {
                    let to = GridLocation::new(nr, nc);
                    let weight = cost(from, to);
                    if weight.is_finite() {
                        graph.connect(self.vertex_id(from), self.vertex_id(to), weight);
                    }
                }
            }
        }

        (graph, locations)
    }

    /// Handle of the vertex `to_graph` created for `loc`
    pub fn vertex_id(&self, loc: GridLocation) -> VertexId {
        VertexId(loc.row * self.cols + loc.col)
    }

    /// Find a vertex by name, or by `row,col` coordinates
    pub fn resolve(&self, graph: &Graph, spec: &str) -> Result<VertexId> {
        if let Some(id) = graph.vertex(spec) {
            return Ok(id);
        }
        let coords = spec.trim().trim_start_matches('(').trim_end_matches(')');
        let parsed = coords.split_once(',').and_then(|(r, c)| {
            Some((r.trim().parse::<usize>().ok()?, c.trim().parse::<usize>().ok()?))
        });
        match parsed {
            Some((row, col)) if self.in_bounds(row, col) => {
                Ok(self.vertex_id(GridLocation::new(row, col)))
            }
            _ => Err(TrailblazerError::unknown_vertex(spec)),
        }
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (-1i64..=1)
            .flat_map(|dr| (-1i64..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let nr = usize::try_from(row as i64 + dr).ok()?;
                let nc = usize::try_from(col as i64 + dc).ok()?;
                self.in_bounds(nr, nc).then_some((nr, nc))
            })
    }

    /// Parse the body of a grid world file.
    ///
    /// Format: the type token, then `rows cols`, then `rows * cols` cell
    /// values separated by whitespace, each within `[min, max]`.
    pub fn parse(text: &str, kind: &str, min: f64, max: f64) -> Result<Grid> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

        let (line, header) = tokens
            .next()
            .ok_or_else(|| TrailblazerError::invalid_world(1, "empty world file"))?;
        if header != kind {
            crate::bail_world!(line, "world file must start with type '{}'", kind);
        }
        let last_line = text.lines().count().max(1);

        let mut dimension = |what: &str| -> Result<usize> {
            let (line, tok) = tokens
                .next()
                .ok_or_else(|| TrailblazerError::invalid_world(last_line, format!("missing {what}")))?;
            let value: usize = tok.parse().map_err(|_| {
                TrailblazerError::invalid_world(line, format!("invalid {what}: {tok}"))
            })?;
            if value == 0 || value >= MAX_ROWS_COLS {
                crate::bail_world!(
                    line,
                    "{} must be between 1 and {}, got {}",
                    what,
                    MAX_ROWS_COLS - 1,
                    value
                );
            }
            Ok(value)
        };
        let rows = dimension("row count")?;
        let cols = dimension("column count")?;

        let mut grid = Grid::new(rows, cols, 0.0);
        for row in 0..rows {
            for col in 0..cols {
                let Some((line, tok)) = tokens.next() else {
                    crate::bail_world!(
                        last_line,
                        "row {} does not contain {} valid numbers",
                        row + 1,
                        cols
                    );
                };
                let value: f64 = tok.parse().map_err(|_| {
                    TrailblazerError::invalid_world(line, format!("invalid cell value: {tok}"))
                })?;
                if !(min..=max).contains(&value) {
                    crate::bail_world!(
                        line,
                        "invalid cell value {}, must be {} - {}",
                        value,
                        min,
                        max
                    );
                }
                grid.set(row, col, value);
            }
        }

        Ok(grid)
    }

    /// Render in the format accepted by `parse`
    pub fn to_text(&self, kind: &str) -> String {
        let mut out = format!("{kind}\n{} {}\n", self.rows, self.cols);
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.get(row, col).to_string())
                .collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }
}

/// Number of decimal digits in `n` (at least one)
pub fn count_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(161), 3);
    }

    #[test]
    fn test_vertex_name_padding() {
        let grid = Grid::new(12, 3, 0.0);
        assert_eq!(grid.vertex_name(3, 1), "r03c01");
        let small = Grid::new(5, 5, 0.0);
        assert_eq!(small.vertex_name(4, 0), "r4c0");
    }

    #[test]
    fn test_to_graph_eight_neighbors() {
        let grid = Grid::new(3, 3, 1.0);
        let (graph, locations) = grid.to_graph(|_, _| 1.0);

        assert_eq!(graph.vertex_count(), 9);
        assert_eq!(locations[4], GridLocation::new(1, 1));
        let center = graph.vertex("r1c1").unwrap();
        assert_eq!(graph.neighbors(center).count(), 8);
        let corner = graph.vertex("r0c0").unwrap();
        assert_eq!(graph.neighbors(corner).count(), 3);
    }

    #[test]
    fn test_to_graph_skips_infinite_costs() {
        let grid = Grid::new(2, 2, 1.0);
        let (graph, _) = grid.to_graph(|a, b| {
            let (dr, dc) = a.delta(b);
            if dr == 1 && dc == 1 {
                f64::INFINITY
            } else {
                1.0
            }
        });
        let corner = graph.vertex("r0c0").unwrap();
        assert_eq!(graph.neighbors(corner).count(), 2);
        assert!(!graph.contains_edge("r0c0", "r1c1"));
    }

    #[test]
    fn test_vertex_id_matches_graph() {
        let grid = Grid::new(4, 5, 0.0);
        let (graph, _) = grid.to_graph(|_, _| 1.0);
        let loc = GridLocation::new(2, 3);
        assert_eq!(graph.name(grid.vertex_id(loc)), "r2c3");
    }

    #[test]
    fn test_resolve_by_name_or_coords() {
        let grid = Grid::new(3, 4, 1.0);
        let (graph, _) = grid.to_graph(|_, _| 1.0);

        let by_name = grid.resolve(&graph, "r1c2").unwrap();
        assert_eq!(grid.resolve(&graph, "1,2").unwrap(), by_name);
        assert_eq!(grid.resolve(&graph, "(1, 2)").unwrap(), by_name);
        assert!(matches!(
            grid.resolve(&graph, "3,0"),
            Err(TrailblazerError::UnknownVertex { .. })
        ));
        assert!(grid.resolve(&graph, "north").is_err());
    }

    #[test]
    fn test_parse_grid() {
        let text = "terrain\n2 3\n0 0.5 1\n0.25 0.75 0\n";
        let grid = Grid::parse(text, "terrain", 0.0, 1.0).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(0, 1), 0.5);
        assert_eq!(grid.get(1, 0), 0.25);
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = Grid::parse("maze\n1 1\n1\n", "terrain", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, TrailblazerError::InvalidWorld { line: 1, .. }));
    }

    #[test]
    fn test_parse_bad_dimensions() {
        let err = Grid::parse("maze\n0 3\n", "maze", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, TrailblazerError::InvalidWorld { line: 2, .. }));

        let err = Grid::parse("maze\n400 3\n", "maze", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, TrailblazerError::InvalidWorld { .. }));
    }

    #[test]
    fn test_parse_value_out_of_range() {
        let err = Grid::parse("maze\n1 2\n1 2\n", "maze", 0.0, 1.0).unwrap_err();
        match err {
            TrailblazerError::InvalidWorld { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("invalid cell value 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_truncated() {
        let err = Grid::parse("maze\n2 2\n1 1\n1\n", "maze", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, TrailblazerError::InvalidWorld { .. }));
    }

    #[test]
    fn test_text_round_trip() {
        let mut grid = Grid::new(2, 2, 1.0);
        grid.set(0, 1, 0.0);
        let text = grid.to_text("maze");
        assert_eq!(text, "maze\n2 2\n1 0\n1 1\n");
        assert_eq!(Grid::parse(&text, "maze", 0.0, 1.0).unwrap(), grid);
    }
}
