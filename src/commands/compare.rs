//! `trailblazer compare` command - run every search on one query

use serde::Serialize;
use trailblazer_core::error::Result;
use trailblazer_core::graph::{Algorithm, Color, ColorTally};
use trailblazer_core::world::WorldHeuristic;

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format;

#[derive(Debug, Serialize)]
struct Outcome {
    algorithm: Algorithm,
    found: bool,
    optimal: bool,
    vertices: usize,
    cost: Option<f64>,
    visited: usize,
    discovered: usize,
}

/// Execute the compare command
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let world = ctx.load_world(&args.world)?;
    let graph = world.graph();
    let from = world.resolve(&args.from)?;
    let to = world.resolve(&args.to)?;
    let heuristic = WorldHeuristic(world.as_ref());

    let outcomes: Vec<Outcome> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            graph.reset_annotations();
            let mut tally = ColorTally::new();
            let path = algorithm.find_path(graph, from, to, &heuristic, &mut tally);
            Outcome {
                algorithm,
                found: !path.is_empty(),
                optimal: algorithm.is_weighted(),
                vertices: path.len(),
                cost: path.cost(graph),
                visited: tally.get(Color::Green),
                discovered: tally.get(Color::Yellow),
            }
        })
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} -> {}", graph.name(from), graph.name(to));
            }
            println!(
                "{:<10} {:>8} {:>10} {:>8} {:>10}  {}",
                "algorithm", "vertices", "cost", "visited", "discovered", "optimal"
            );
            for outcome in &outcomes {
                let cost = outcome.cost.map_or_else(|| "-".to_string(), format::cost);
                println!(
                    "{:<10} {:>8} {:>10} {:>8} {:>10}  {}",
                    outcome.algorithm.to_string(),
                    outcome.vertices,
                    cost,
                    outcome.visited,
                    outcome.discovered,
                    if outcome.optimal { "yes" } else { "no" }
                );
            }
        }
    }

    Ok(())
}
