//! Error types and exit codes for trailblazer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, malformed world file)
//!
//! An unreachable goal is not an error: searches return an empty `Path`.

mod macros;

use thiserror::Error;

/// Exit codes for the trailblazer CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid world file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trailblazer operations
#[derive(Error, Debug)]
pub enum TrailblazerError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dfs, bfs, dijkstra, or astar)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown vertex: {name}")]
    UnknownVertex { name: String },

    #[error("invalid world file (line {line}): {reason}")]
    InvalidWorld { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TrailblazerError {
    /// Create an error for a vertex name that is not in the graph
    pub fn unknown_vertex(name: impl Into<String>) -> Self {
        TrailblazerError::UnknownVertex { name: name.into() }
    }

    /// Create an error for malformed world input at a given line (1-based)
    pub fn invalid_world(line: usize, reason: impl std::fmt::Display) -> Self {
        TrailblazerError::InvalidWorld {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrailblazerError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrailblazerError::UnknownFormat(_)
            | TrailblazerError::UnknownAlgorithm(_)
            | TrailblazerError::UsageError(_)
            | TrailblazerError::InvalidValue { .. } => ExitCode::Usage,

            TrailblazerError::UnknownVertex { .. } | TrailblazerError::InvalidWorld { .. } => {
                ExitCode::Data
            }

            TrailblazerError::Io(_)
            | TrailblazerError::Json(_)
            | TrailblazerError::Toml(_)
            | TrailblazerError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrailblazerError::UnknownFormat(_) => "unknown_format",
            TrailblazerError::UnknownAlgorithm(_) => "unknown_algorithm",
            TrailblazerError::UsageError(_) => "usage_error",
            TrailblazerError::InvalidValue { .. } => "invalid_value",
            TrailblazerError::UnknownVertex { .. } => "unknown_vertex",
            TrailblazerError::InvalidWorld { .. } => "invalid_world",
            TrailblazerError::Io(_) => "io_error",
            TrailblazerError::Json(_) => "json_error",
            TrailblazerError::Toml(_) => "toml_error",
            TrailblazerError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            TrailblazerError::UnknownVertex { name } => {
                error_obj["vertex"] = serde_json::json!(name);
            }
            TrailblazerError::InvalidWorld { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for trailblazer operations
pub type Result<T> = std::result::Result<T, TrailblazerError>;
