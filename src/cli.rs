//! CLI argument parsing for floodfill
//!
//! With no flags the program reads stdin and runs BFS then DFS.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use floodfill_core::config::ColorMode;
pub use floodfill_core::format::OutputFormat;
pub use floodfill_core::graph::Algorithm;

/// Flood fill a pixel graph and watch it spread
#[derive(Parser, Debug)]
#[command(name = "floodfill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read the graph description from a file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Emit ANSI colors in rendered grids (overrides the config file)
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Traversal to run; repeat to run several in order (overrides the config file)
    #[arg(long = "algorithm", short, value_enum, action = ArgAction::Append)]
    pub algorithms: Vec<Algorithm>,

    /// TOML configuration file
    #[arg(long, env = "FLOODFILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress lines and error messages
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "floodfill_core=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["floodfill"]).unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(cli.color.is_none());
        assert!(cli.algorithms.is_empty());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_repeated_algorithm() {
        let cli = Cli::try_parse_from(["floodfill", "-a", "dfs", "--algorithm", "bfs"]).unwrap();
        assert_eq!(cli.algorithms, vec![Algorithm::Dfs, Algorithm::Bfs]);
    }

    #[test]
    fn test_color_and_format() {
        let cli =
            Cli::try_parse_from(["floodfill", "--color", "never", "--format", "json"]).unwrap();
        assert_eq!(cli.color, Some(ColorMode::Never));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_algorithm_rejected() {
        assert!(Cli::try_parse_from(["floodfill", "--algorithm", "astar"]).is_err());
    }

    #[test]
    fn test_parse_cli_version() {
        let result = Cli::try_parse_from(["floodfill", "--version"]);
        assert!(result.is_err()); // --version exits
    }
}
