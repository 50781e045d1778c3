use std::collections::VecDeque;

use crate::graph::algos::shared::paint;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Color, Path, VertexId};
use crate::graph::Graph;

/// Breadth-first search from `start` to `end`.
///
/// The queue holds whole paths. A neighbor is marked visited when its
/// path is enqueued, so each vertex enters the queue at most once. The
/// returned path has the fewest edges of any start→end path, or is empty
/// when `end` is unreachable.
#[tracing::instrument(level = "debug", skip(graph, observer))]
pub fn breadth_first_search(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    observer: &mut dyn SearchObserver,
) -> Path {
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue: VecDeque<Vec<VertexId>> = VecDeque::new();

    visited[start.index()] = true;
    paint(graph, observer, start, Color::Yellow);
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };
        paint(graph, observer, current, Color::Green);

        if current == end {
            tracing::debug!(length = path.len(), "bfs_found");
            return Path::from(path);
        }

        for neighbor in graph.neighbors(current) {
            if visited[neighbor.index()] {
                continue;
            }
            visited[neighbor.index()] = true;
            paint(graph, observer, neighbor, Color::Yellow);

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(neighbor);
            queue.push_back(extended);
        }
    }

    tracing::debug!("bfs_exhausted");
    Path::empty()
}
