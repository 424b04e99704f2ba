use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced by the page-view report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input (bad quoting, ragged rows, ...).
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row is not exactly `date,value`.
    #[error("Unexpected CSV header: expected [{expected}], found [{found}]")]
    SchemaMismatch { expected: String, found: String },

    /// A record lacks one of the two required fields.
    #[error("Line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Line {line}: invalid date {value:?}")]
    DateParse { line: u64, value: String },

    /// A value string is not a non-negative integer.
    #[error("Line {line}: invalid page-view count {value:?}")]
    ValueParse { line: u64, value: String },

    /// The same date appears on two consecutive records.
    #[error("Line {line}: duplicate date {date}")]
    DuplicateDate { line: u64, date: NaiveDate },

    /// A date is earlier than the one on the preceding record.
    #[error("Line {line}: date {date} is earlier than preceding date {previous}")]
    OutOfOrder {
        line: u64,
        date: NaiveDate,
        previous: NaiveDate,
    },

    /// No observations to compute quantiles on, or none left after filtering.
    #[error("No observations available: {0}")]
    EmptyInput(String),

    /// A quantile cut point outside `[0, 1]` or an inverted pair.
    #[error("Invalid quantile: {0}")]
    InvalidQuantile(String),

    /// A chart renderer failed to produce its artefact.
    #[error("Render error: {0}")]
    Render(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
