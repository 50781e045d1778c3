//! Shared human-readable formatting

use trailblazer_core::graph::{Graph, Path};

/// Vertex names joined by arrows
pub fn path_line(graph: &Graph, path: &Path) -> String {
    path.names(graph).join(" -> ")
}

/// Render a cost without a trailing `.0` for whole numbers
pub fn cost(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.3}")
    }
}
