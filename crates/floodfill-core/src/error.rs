//! Error types and exit codes for floodfill
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, bad config values)
//! - 3: Data error (malformed input, unknown color, bad node index)

mod macros;

use thiserror::Error;

/// Exit codes for the floodfill binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the input payload could not be turned into a graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building, filling or rendering a graph
#[derive(Error, Debug)]
pub enum FloodError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("input ended at line {line}: expected {expected}")]
    TruncatedInput { line: usize, expected: String },

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("{0} is not a valid color!")]
    UnknownColor(String),

    #[error("node index {index} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { index: usize, node_count: usize },

    #[error("node {index} at ({x},{y}) lies outside the {size}x{size} image")]
    OutOfGrid {
        index: usize,
        x: usize,
        y: usize,
        size: usize,
    },

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

impl FloodError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FloodError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a line that does not match its expected shape
    pub fn malformed(line: usize, reason: impl std::fmt::Display) -> Self {
        FloodError::MalformedInput {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for input that stops before a declared record
    pub fn truncated(line: usize, expected: impl std::fmt::Display) -> Self {
        FloodError::TruncatedInput {
            line,
            expected: expected.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FloodError::UsageError(_)
            | FloodError::InvalidValue { .. } => ExitCode::Usage,

            FloodError::TruncatedInput { .. }
            | FloodError::MalformedInput { .. }
            | FloodError::UnknownColor(_)
            | FloodError::NodeOutOfRange { .. }
            | FloodError::OutOfGrid { .. } => ExitCode::Data,

            FloodError::Io(_)
            | FloodError::Json(_)
            | FloodError::Toml(_)
            | FloodError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FloodError::UsageError(_) => "usage_error",
            FloodError::InvalidValue { .. } => "invalid_value",
            FloodError::TruncatedInput { .. } => "truncated_input",
            FloodError::MalformedInput { .. } => "malformed_input",
            FloodError::UnknownColor(_) => "unknown_color",
            FloodError::NodeOutOfRange { .. } => "node_out_of_range",
            FloodError::OutOfGrid { .. } => "out_of_grid",
            FloodError::Io(_) => "io_error",
            FloodError::Json(_) => "json_error",
            FloodError::Toml(_) => "toml_error",
            FloodError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for floodfill operations
pub type Result<T> = std::result::Result<T, FloodError>;
