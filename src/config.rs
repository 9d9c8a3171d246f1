//! User configuration from `crewgraph.toml`
//!
//! ```toml
//! [layout]
//! direction = "LR"
//! node_spacing = 80.0
//! routing = "orthogonal"
//!
//! [layout.agent_size]
//! width = 240.0
//! height = 160.0
//!
//! [display]
//! color = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::layout::LayoutConfig;

pub const CONFIG_FILE_NAME: &str = "crewgraph.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Colored terminal output
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: LayoutConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Load a specific config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .layout
            .validate()
            .with_context(|| format!("Invalid layout settings in {}", path.display()))?;

        Ok(config)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// `./crewgraph.toml` and `<config dir>/crewgraph/config.toml` wins, and
    /// defaults apply when neither exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        for candidate in search_paths(&cwd) {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "using config file");
                return Self::from_file(&candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

/// Implicit config locations, most specific first
pub fn search_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("crewgraph").join("config.toml"));
    }
    paths
}
