//! Configuration for trailblazer
//!
//! Resolution order: an explicit path, then `./trailblazer.toml`, then
//! `<config dir>/trailblazer/config.toml`, then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrailblazerError};

pub use types::{
    MapConfig, MazeConfig, SearchConfig, TerrainConfig, TrailblazerConfig,
    DEFAULT_ALTITUDE_PENALTY,
};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "trailblazer.toml";

/// Config file name inside the user config directory
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the user config directory
pub const CONFIG_DIR_ENV_VAR: &str = "TRAILBLAZER_CONFIG_DIR";

impl TrailblazerConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TrailblazerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrailblazerError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve and load configuration.
    ///
    /// Returns the config together with the file it came from, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, Some(local)));
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Ok((Self::load(&global)?, Some(global)));
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    fn validate(&self) -> Result<()> {
        let penalty = self.terrain.altitude_penalty;
        if !penalty.is_finite() || penalty < 0.0 {
            crate::bail_invalid!("terrain.altitude_penalty", penalty);
        }
        Ok(())
    }
}

fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => dirs::config_dir()?.join("trailblazer"),
    };
    Some(dir.join(GLOBAL_CONFIG_FILE))
}
