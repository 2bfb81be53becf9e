//! Error types for Strata.
//!
//! Terrain generation, streaming, and viewport math are total and never fail.
//! Errors only arise at the edges: reading configuration, parsing scripted
//! input, and writing rendered frames.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for Strata operations.
#[derive(Debug, Error)]
pub enum StrataError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scripted input could not be parsed
    #[error("Input error: {0}")]
    Input(#[from] InputParseError),

    /// Frame export failed
    #[error("Failed to export frame to {path}: {reason}")]
    Export {
        /// Destination path
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be parsed
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// Errors parsing a textual input event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    /// Empty line
    #[error("empty input event")]
    Empty,

    /// Unrecognized event name
    #[error("unknown input event `{0}`")]
    UnknownEvent(String),

    /// Wrong number of arguments
    #[error("`{event}` expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Event name
        event: String,
        /// Expected count
        expected: &'static str,
        /// Count found
        actual: usize,
    },

    /// Argument was not a number
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

/// Result type alias for Strata operations.
pub type StrataResult<T> = Result<T, StrataError>;
