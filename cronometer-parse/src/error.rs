//! Parse error types.

use thiserror::Error;

/// Error type for export parsing.
///
/// A parse never returns partial results: the first bad cell, bad
/// timestamp, or structural CSV problem aborts the whole parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed CSV structure (ragged rows, encoding errors).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A recognized column's value failed to parse.
    #[error("failed to parse column {column:?}: {message}")]
    FieldParse {
        /// Name of the offending column.
        column: String,
        /// Underlying parse failure.
        message: String,
    },

    /// The combined `Day` + `Time` value failed to parse.
    #[error("failed to parse record timestamp {value:?}: {message}")]
    Timestamp {
        /// The raw combined value.
        value: String,
        /// Underlying parse failure.
        message: String,
    },
}

impl ParseError {
    /// Builds a `FieldParse` error for the given column.
    pub(crate) fn field(column: &str, err: impl std::fmt::Display) -> Self {
        Self::FieldParse {
            column: column.to_string(),
            message: err.to_string(),
        }
    }
}
