//! CLI argument parsing for trailblazer
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod args;
pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{CompareArgs, MazeArgs, MstArgs, PathArgs};
pub use output::OutputFormat;
use parse::parse_format;

/// Trailblazer - route finding over mazes, terrain and maps
#[derive(Parser, Debug)]
#[command(name = "trailblazer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file [default: ./trailblazer.toml, then the user config dir]
    #[arg(long, global = true, env = "TRAILBLAZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug output and phase timing to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two vertices
    Path(PathArgs),

    /// Compute a minimum spanning forest with Kruskal's algorithm
    Mst(MstArgs),

    /// Generate a random maze world file
    Maze(MazeArgs),

    /// Run every search algorithm on the same query
    Compare(CompareArgs),
}
