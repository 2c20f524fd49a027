//! Error types for the cram core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cram core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, reviewing, or saving a deck.
///
/// Path and format errors indicate a user input problem and are never
/// retried. Grader errors reach the review session, which may offer the
/// user a retry before giving up.
#[derive(Debug, Error)]
pub enum Error {
    /// The deck path does not end in `.csv`.
    #[error("deck must be a .csv file: {}", .0.display())]
    NotCsv(PathBuf),

    /// The deck path does not exist.
    #[error("deck file not found: {}", .0.display())]
    DeckNotFound(PathBuf),

    /// The header row is not the expected four columns in order.
    #[error("invalid deck header (expected id,content,bin,nextShown): {found}")]
    Header {
        /// The header row that was found.
        found: String,
    },

    /// A row's bin could not be parsed as a non-negative integer.
    #[error("invalid bin value: {value}")]
    InvalidBin {
        /// The offending field value.
        value: String,
    },

    /// A row's next-shown date is not a valid `YYYY-MM-DD` date.
    #[error("invalid date value: {value}")]
    InvalidDate {
        /// The offending field value.
        value: String,
    },

    /// The deck file is not valid UTF-8.
    #[error("deck file is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),

    /// Malformed CSV (unbalanced quotes, ragged rows).
    #[error("invalid deck file: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external grader failed to produce a verdict.
    #[error("grader error: {0}")]
    Grader(String),

    /// The review session was aborted. Nothing was saved.
    #[error("review session aborted; deck left unchanged")]
    Aborted,
}
