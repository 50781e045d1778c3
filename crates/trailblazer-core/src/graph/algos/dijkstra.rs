use crate::graph::algos::heuristic::{Heuristic, ZeroHeuristic};
use crate::graph::algos::shared::{paint, reconstruct_path};
use crate::graph::frontier::Frontier;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Color, Path, VertexId};
use crate::graph::Graph;

/// Per-search working state, discarded on return
struct SearchState {
    distance: Vec<f64>,
    predecessor: Vec<Option<VertexId>>,
    finalized: Vec<bool>,
    frontier: Frontier<VertexId>,
}

impl SearchState {
    fn new(vertex_count: usize) -> Self {
        Self {
            distance: vec![f64::INFINITY; vertex_count],
            predecessor: vec![None; vertex_count],
            finalized: vec![false; vertex_count],
            frontier: Frontier::new(),
        }
    }
}

/// Dijkstra's shortest path from `start` to `end`.
///
/// Edge weights must be non-negative for the result to be optimal.
pub fn dijkstra(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    observer: &mut dyn SearchObserver,
) -> Path {
    shortest_path(graph, start, end, &ZeroHeuristic, observer)
}

/// A* search: Dijkstra with each frontier priority raised by
/// `heuristic(v, end)`.
///
/// The path is optimal when the heuristic never overestimates.
pub fn a_star(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    heuristic: &dyn Heuristic,
    observer: &mut dyn SearchObserver,
) -> Path {
    shortest_path(graph, start, end, heuristic, observer)
}

/// Relaxation loop shared by Dijkstra and A*.
///
/// Vertices are pushed again instead of decreased in place; a popped
/// vertex that is already finalized is skipped.
#[tracing::instrument(level = "debug", skip(graph, heuristic, observer))]
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
    heuristic: &dyn Heuristic,
    observer: &mut dyn SearchObserver,
) -> Path {
    let mut state = SearchState::new(graph.vertex_count());

    state.distance[start.index()] = 0.0;
    graph.set_cost(start, 0.0);
    state
        .frontier
        .push(start, heuristic.estimate(start, end));
    paint(graph, observer, start, Color::Yellow);

    let mut expanded = 0usize;
    while let Some(current) = state.frontier.pop() {
        if state.finalized[current.index()] {
            continue;
        }
        paint(graph, observer, current, Color::Green);

        if current == end {
            let path = reconstruct_path(&state.predecessor, start, end);
            tracing::debug!(
                expanded,
                cost = state.distance[end.index()],
                length = path.len(),
                "shortest_path_found"
            );
            return path;
        }

        state.finalized[current.index()] = true;
        expanded += 1;

        let base = state.distance[current.index()];
        for edge in graph.out_edges(current) {
            let neighbor = edge.end;
            let candidate = base + edge.weight;
            if state.finalized[neighbor.index()] || candidate >= state.distance[neighbor.index()] {
                continue;
            }

            state.distance[neighbor.index()] = candidate;
            state.predecessor[neighbor.index()] = Some(current);
            graph.set_cost(neighbor, candidate);
            state
                .frontier
                .push(neighbor, candidate + heuristic.estimate(neighbor, end));
            paint(graph, observer, neighbor, Color::Yellow);
        }
    }

    tracing::debug!(expanded, "shortest_path_exhausted");
    Path::empty()
}
