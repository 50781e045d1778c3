//! `trailblazer mst` command - minimum spanning forest

use serde_json::json;
use tracing::info;
use trailblazer_core::error::Result;
use trailblazer_core::graph::{kruskal, NoopObserver};

use crate::cli::{MstArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format;

/// Execute the mst command
pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let world = ctx.load_world(&args.world)?;
    let graph = world.graph();

    let forest = kruskal(graph, &mut NoopObserver);
    let total = forest.total_weight(graph);
    let components = graph.vertex_count() - forest.len();
    info!(edges = forest.len(), components, "mst_complete");

    match ctx.cli.format {
        OutputFormat::Json => {
            let edges: Vec<_> = forest
                .edges()
                .iter()
                .map(|&id| {
                    let edge = graph.edge_data(id);
                    json!({
                        "from": graph.name(edge.start),
                        "to": graph.name(edge.end),
                        "weight": edge.weight,
                    })
                })
                .collect();
            let output = json!({
                "world": world.kind(),
                "edges": edges,
                "edge_count": forest.len(),
                "total_weight": total,
                "components": components,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for &id in forest.edges() {
                let edge = graph.edge_data(id);
                println!(
                    "{} - {} ({})",
                    graph.name(edge.start),
                    graph.name(edge.end),
                    format::cost(edge.weight)
                );
            }
            if !ctx.cli.quiet {
                println!(
                    "Total weight: {} ({} edges, {} components)",
                    format::cost(total),
                    forest.len(),
                    components
                );
            }
        }
    }

    Ok(())
}
