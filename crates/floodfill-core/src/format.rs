//! Output format handling for floodfill
//!
//! - human: adjacency matrix and a colored grid after every recolor
//! - json: a single machine-readable report, no grids

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format for the floodfill binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
