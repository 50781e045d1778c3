//! `trailblazer path` command - search between two vertices

use std::time::Instant;

use serde_json::json;
use tracing::info;
use trailblazer_core::error::Result;
use trailblazer_core::graph::{Algorithm, Color, ColorTally, SearchObserver, VertexId};
use trailblazer_core::trace_time;
use trailblazer_core::world::{World, WorldHeuristic};

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format;

/// Counts color transitions and optionally keeps every one in order
#[derive(Default)]
struct Recorder {
    tally: ColorTally,
    events: Option<Vec<(VertexId, Color)>>,
}

impl SearchObserver for Recorder {
    fn vertex_colored(&mut self, vertex: VertexId, color: Color) {
        self.tally.vertex_colored(vertex, color);
        if let Some(events) = &mut self.events {
            events.push((vertex, color));
        }
    }
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let world = ctx.load_world(&args.world)?;
    let algorithm = args.algorithm.unwrap_or(ctx.config.search.algorithm);
    let from = world.resolve(&args.from)?;
    let to = world.resolve(&args.to)?;

    let mut recorder = Recorder {
        events: args.trace.then(Vec::new),
        ..Recorder::default()
    };

    let searched = Instant::now();
    let path = algorithm.find_path(
        world.graph(),
        from,
        to,
        &WorldHeuristic(world.as_ref()),
        &mut recorder,
    );
    trace_time!(searched, "search", algorithm = algorithm.label());
    info!(
        %algorithm,
        found = !path.is_empty(),
        visited = recorder.tally.get(Color::Green),
        "search_complete"
    );

    let graph = world.graph();
    let cost = path.cost(graph);
    let visited = recorder.tally.get(Color::Green);
    let discovered = recorder.tally.get(Color::Yellow);

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut output = json!({
                "world": world.kind(),
                "algorithm": algorithm,
                "from": graph.name(from),
                "to": graph.name(to),
                "found": !path.is_empty(),
                "path": path.names(graph),
                "cost": cost,
                "visited": visited,
                "discovered": discovered,
            });
            if let Some(events) = &recorder.events {
                output["trace"] = events
                    .iter()
                    .map(|&(v, color)| json!({ "vertex": graph.name(v), "color": color }))
                    .collect();
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if let Some(events) = &recorder.events {
                for &(v, color) in events {
                    println!("{} -> {}", graph.name(v), color);
                }
            }
            output_human(ctx, world.as_ref(), algorithm, (from, to), &path, cost);
            if !ctx.cli.quiet {
                println!("Visited: {visited}, discovered: {discovered}");
            }
        }
    }

    Ok(())
}

fn output_human(
    ctx: &CommandContext,
    world: &dyn World,
    algorithm: Algorithm,
    (from, to): (VertexId, VertexId),
    path: &trailblazer_core::graph::Path,
    cost: Option<f64>,
) {
    let graph = world.graph();
    match cost {
        Some(cost) if !path.is_empty() => {
            println!("{}", format::path_line(graph, path));
            if !ctx.cli.quiet {
                println!(
                    "Algorithm: {} ({} vertices, cost {})",
                    algorithm.label(),
                    path.len(),
                    format::cost(cost)
                );
            }
        }
        _ => println!(
            "No path found from {} to {}",
            graph.name(from),
            graph.name(to)
        ),
    }
}
