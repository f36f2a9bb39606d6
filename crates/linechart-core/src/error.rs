// File: crates/linechart-core/src/error.rs
// Summary: Error type for extraction, validation and painting.

use std::fmt;

use thiserror::Error;

/// Which metadata list a key was declared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Dimension,
    Measure,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Dimension => f.write_str("dimension"),
            KeyKind::Measure => f.write_str("measure"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// A row lacks a cell for a declared dimension or measure key.
    #[error("row {row} has no cell for {kind} `{key}`")]
    MissingCell { row: usize, kind: KeyKind, key: String },

    /// A measure cell whose `raw` value is not a JSON number.
    #[error("row {row}: measure `{key}` has non-numeric raw value {raw}")]
    NonNumericCell { row: usize, key: String, raw: String },

    /// The drawing backend refused a primitive.
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

impl ChartError {
    pub fn backend(err: impl fmt::Display) -> Self {
        ChartError::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
