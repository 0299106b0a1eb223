//! Error types for the covering planner

use thiserror::Error;

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing targets or constructing commands
#[derive(Error, Debug)]
pub enum Error {
    /// A line command was constructed with endpoints that are neither
    /// horizontally nor vertically aligned
    #[error("line endpoints not axis-aligned: ({x1}, {y1}) -> ({x2}, {y2})")]
    DiagonalLine {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },

    /// The target's first line did not contain a valid `H W` pair
    #[error("invalid target header: {0}")]
    InvalidHeader(String),

    /// The target declared more rows than it contains
    #[error("target declared {expected} rows but only {found} were present")]
    RowCount { expected: usize, found: usize },

    /// A target row was shorter than the declared width
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// I/O failure while reading a target or writing a plan
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
