use trailblazer_core::graph::Algorithm;
use trailblazer_core::world::WorldSize;

use super::output::OutputFormat;

/// Parse a search algorithm name
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse a world size preset
pub fn parse_world_size(s: &str) -> std::result::Result<WorldSize, String> {
    s.parse::<WorldSize>().map_err(|e| e.to_string())
}

/// Parse an output format
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
