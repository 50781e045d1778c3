use crate::graph::observer::SearchObserver;
use crate::graph::types::{Color, Path, VertexId};
use crate::graph::Graph;

/// Set a vertex color on the graph, then notify the observer
pub fn paint(graph: &Graph, observer: &mut dyn SearchObserver, vertex: VertexId, color: Color) {
    graph.set_color(vertex, color);
    observer.vertex_colored(vertex, color);
}

/// Walk predecessor links back from `end` to `start` and return the
/// forward path. Empty if `end` was never reached.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    start: VertexId,
    end: VertexId,
) -> Path {
    let mut vertices = vec![end];
    let mut current = end;

    while current != start {
        match predecessors[current.index()] {
            Some(prev) => {
                vertices.push(prev);
                current = prev;
            }
            None => return Path::empty(),
        }
    }

    vertices.reverse();
    Path::from(vertices)
}
