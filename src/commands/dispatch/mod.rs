//! Command dispatch logic for trailblazer

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use trailblazer_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = CommandContext::new(cli, &cwd, start)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let result = cli.command.execute(&ctx);
    debug!(elapsed = ?ctx.start.elapsed(), "command_complete");
    result
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Mst(args) => commands::mst::execute(ctx, args),
            Commands::Maze(args) => commands::maze::execute(ctx, args),
            Commands::Compare(args) => commands::compare::execute(ctx, args),
        }
    }
}
