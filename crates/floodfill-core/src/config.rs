//! Run configuration for floodfill
//!
//! Loaded from an optional TOML file; every section and key has a default,
//! so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::Algorithm;

/// Glyph drawn (twice) for every pixel
pub const DEFAULT_BLOCK: &str = "\u{2588}";

/// Whether rendered grids carry ANSI color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always emit escape codes (default)
    #[default]
    Always,
    /// Plain text: one letter per color
    Never,
}

/// Grid rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_block")]
    pub block: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            block: default_block(),
        }
    }
}

fn default_block() -> String {
    DEFAULT_BLOCK.to_string()
}

/// Which traversals run, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            algorithms: default_algorithms(),
        }
    }
}

fn default_algorithms() -> Vec<Algorithm> {
    vec![Algorithm::Bfs, Algorithm::Dfs]
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

impl FillConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FillConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reject values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.render.block.is_empty() {
            bail_invalid!("render.block", "\"\" (must not be empty)");
        }
        if self.traversal.algorithms.is_empty() {
            bail_invalid!("traversal.algorithms", "[] (must name bfs and/or dfs)");
        }
        Ok(())
    }
}
