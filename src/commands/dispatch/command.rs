//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use trailblazer_core::config::TrailblazerConfig;
use trailblazer_core::error::Result;
use trailblazer_core::trace_time;
use trailblazer_core::world::{self, World};

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: TrailblazerConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve configuration relative to `cwd`
    pub fn new(cli: &'a Cli, cwd: &Path, start: Instant) -> Result<Self> {
        let (config, source) = TrailblazerConfig::discover(cli.config.as_deref(), cwd)?;
        if let Some(path) = &source {
            debug!(path = %path.display(), "config_loaded");
        }
        Ok(Self { cli, config, start })
    }

    pub fn load_world(&self, path: &Path) -> Result<Box<dyn World>> {
        let loaded = Instant::now();
        let world = world::load_world(path, &self.config)?;
        trace_time!(loaded, "load_world");
        Ok(world)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
