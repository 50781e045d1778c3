//! `trailblazer maze` command - generate a random maze world

use std::fs;

use serde_json::json;
use tracing::info;
use trailblazer_core::error::Result;
use trailblazer_core::world::{MazeWorld, World};

use crate::cli::{MazeArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

/// Execute the maze command
pub fn execute(ctx: &CommandContext, args: &MazeArgs) -> Result<()> {
    let size = args.size.unwrap_or(ctx.config.maze.size);
    let seed = args.seed.or(ctx.config.maze.seed);
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let maze = MazeWorld::generate(size, &mut rng);
    let text = maze.to_text();
    let (rows, cols) = (maze.grid().rows(), maze.grid().cols());
    info!(%size, ?seed, rows, cols, "maze_generated");

    if let Some(path) = &args.output {
        fs::write(path, &text)?;
    }

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut output = json!({
                "size": size,
                "seed": seed,
                "rows": rows,
                "cols": cols,
            });
            match &args.output {
                Some(path) => output["output"] = json!(path.display().to_string()),
                None => output["world"] = json!(text),
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &args.output {
            Some(path) => {
                if !ctx.cli.quiet {
                    println!(
                        "Wrote {} maze ({}x{}) to {}",
                        size,
                        rows,
                        cols,
                        path.display()
                    );
                }
            }
            None => print!("{text}"),
        },
    }

    Ok(())
}
