use crate::graph::algos::shared::paint;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Color, Path, VertexId};
use crate::graph::Graph;

/// Depth-first search from `start` to `end`.
///
/// Returns the first complete path found in neighbor order, with no
/// shortest-path guarantee, or an empty path when `end` is unreachable.
///
/// The recursion is kept on an explicit stack: each frame is a vertex on
/// the running path plus the index of the next neighbor to try. A vertex
/// whose neighbors are exhausted is popped from the path and painted gray.
#[tracing::instrument(level = "debug", skip(graph, observer))]
pub fn depth_first_search(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    observer: &mut dyn SearchObserver,
) -> Path {
    let mut visited = vec![false; graph.vertex_count()];
    let mut path: Vec<VertexId> = Vec::new();
    let mut frames: Vec<(VertexId, usize)> = Vec::new();

    visited[start.index()] = true;
    path.push(start);
    paint(graph, observer, start, Color::Green);
    if start == end {
        return Path::from(path);
    }
    frames.push((start, 0));

    while let Some(frame) = frames.last_mut() {
        let (vertex, next) = *frame;
        let out = graph.out_edge_ids(vertex);

        if next < out.len() {
            frame.1 += 1;
            let neighbor = graph.edge_data(out[next]).end;
            if visited[neighbor.index()] {
                continue;
            }

            paint(graph, observer, neighbor, Color::Yellow);
            visited[neighbor.index()] = true;
            path.push(neighbor);
            paint(graph, observer, neighbor, Color::Green);

            if neighbor == end {
                tracing::debug!(length = path.len(), "dfs_found");
                return Path::from(path);
            }
            frames.push((neighbor, 0));
        } else {
            frames.pop();
            path.pop();
            paint(graph, observer, vertex, Color::Gray);
        }
    }

    tracing::debug!("dfs_exhausted");
    Path::empty()
}
