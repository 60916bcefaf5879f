//! Error types for Tome Core

use thiserror::Error;

/// Result type alias using TomeError
pub type Result<T> = std::result::Result<T, TomeError>;

/// Top-level error type for all Tome operations
#[derive(Debug, Error)]
pub enum TomeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// An average was requested over zero ratings
    #[error("No ratings recorded for {0}")]
    EmptyHistory(String),

    #[error("Nothing changed: {0}")]
    NoOp(#[from] NoOpError),

    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Malformed input rejected before any state is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Rating {0} is outside the range 0-4")]
    RatingOutOfRange(i64),

    #[error("'{0}' is not a valid ISBN")]
    InvalidIsbn(String),

    #[error("ISBN {isbn} already belongs to '{title}'")]
    DuplicateIsbn { isbn: String, title: String },

    #[error("Book title must not be empty")]
    EmptyTitle,

    #[error("Reader name must not be empty")]
    EmptyName,
}

/// A key that was never registered in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No reader named '{0}'")]
    UnknownReader(String),

    #[error("No book titled '{0}'")]
    UnknownBook(String),
}

/// A requested change that would leave state as it already is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoOpError {
    #[error("contact address is already {0}")]
    ContactUnchanged(String),
}
