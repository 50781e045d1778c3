use crate::graph::algos::shared::paint;
use crate::graph::cluster::Clusters;
use crate::graph::frontier::Frontier;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Color, EdgeId, SpanningForest};
use crate::graph::Graph;

/// Kruskal's minimum spanning tree.
///
/// Edges are taken in ascending weight order (ties in edge insertion
/// order) and accepted when they join two different clusters. Stops once
/// a single cluster remains or the edges run out; a disconnected graph
/// yields a minimum spanning forest. Negative weights are fine.
///
/// Both endpoints of each accepted edge are painted green.
#[tracing::instrument(level = "debug", skip(graph, observer), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal(graph: &Graph, observer: &mut dyn SearchObserver) -> SpanningForest {
    let mut clusters = Clusters::new(graph.vertex_count());
    let mut frontier: Frontier<EdgeId> = Frontier::new();
    for id in graph.edge_ids() {
        frontier.push(id, graph.edge_data(id).weight);
    }

    let mut forest = SpanningForest::default();
    while clusters.count() > 1 {
        let Some(id) = frontier.pop() else {
            break;
        };
        let edge = graph.edge_data(id);
        if !clusters.union(edge.start.index(), edge.end.index()) {
            continue;
        }
        forest.push(id);
        paint(graph, observer, edge.start, Color::Green);
        paint(graph, observer, edge.end, Color::Green);
    }

    tracing::debug!(
        accepted = forest.len(),
        components = clusters.count(),
        "kruskal_done"
    );
    forest
}
