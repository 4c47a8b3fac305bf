//! Error types for job insight queries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for every query in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A required salary field is absent from the record.
    #[error("job record has no `{field}` field")]
    MissingField { field: &'static str },

    /// A salary or salary field is not an integer or a string that parses as one.
    #[error("`{field}` must be an integer or an integer string, found {found}")]
    InvalidType { field: &'static str, found: String },

    /// A salary field is null.
    #[error("`{field}` cannot be null")]
    NullField { field: &'static str },

    /// `min_salary` is greater than `max_salary`.
    #[error("min_salary ({min}) is greater than max_salary ({max})")]
    InvertedRange { min: i64, max: i64 },

    /// No record carried a usable value for the aggregate.
    #[error("no valid `{field}` values to aggregate")]
    EmptyAggregate { field: &'static str },

    /// Unknown sorting criteria.
    #[error("invalid sorting criteria: {0}")]
    InvalidCriteria(String),

    /// The data source could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Malformed CSV content.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON content.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this is an invalid salary-range input, the single error kind
    /// raised by [`crate::salaries::matches_salary_range`].
    pub fn is_invalid_salary_range(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. }
                | Error::InvalidType { .. }
                | Error::NullField { .. }
                | Error::InvertedRange { .. }
        )
    }
}

/// A specialized Result type for job insight queries.
pub type Result<T> = std::result::Result<T, Error>;
