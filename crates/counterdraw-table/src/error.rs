//! Error types for table loading and record elaboration.

use thiserror::Error;

/// Errors raised while acquiring or parsing the source table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch table from `{address}`: {message}")]
    Fetch { address: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("source table is missing required column `{name}`")]
    MissingColumn { name: String },
}

/// Errors raised while elaborating one table row into a
/// [`CounterRecord`](crate::CounterRecord).
///
/// Dimensions are validated here so the drawing layout only ever sees
/// well-defined geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("required value `{column}` is missing or empty")]
    MissingValue { column: String },

    #[error("value `{value}` in column `{column}` is not a number")]
    InvalidNumber { column: String, value: String },

    #[error("dimension `{column}` must be positive, got {value}")]
    NonPositive { column: String, value: f32 },
}
