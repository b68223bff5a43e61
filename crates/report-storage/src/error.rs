//! Storage error types for report-storage.
//!
//! [`StorageError`] covers the failure modes of the storage layer: database
//! and migration failures, missing reports, and rejected input.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A report with the given ID was not found.
    #[error("report not found: {0}")]
    ReportNotFound(i64),

    /// A required text field was empty.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}
