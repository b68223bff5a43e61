//! The [`ReportStore`] trait defining the storage contract for reports.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! server can swap them without changing handler logic.

use crate::error::StorageError;
use crate::types::{NewReport, Report, ReportId};

/// The storage contract for reports.
///
/// The trait is synchronous; callers serialize access themselves (the server
/// holds the store behind an async mutex).
pub trait ReportStore {
    /// Persists a new report and returns it with its freshly assigned ID.
    ///
    /// Fails with [`StorageError::EmptyField`] if either field is empty.
    fn create_report(&mut self, report: &NewReport) -> Result<Report, StorageError>;

    /// Retrieves a report by ID.
    fn get_report(&self, id: ReportId) -> Result<Report, StorageError>;

    /// Lists every stored report in insertion order.
    fn list_reports(&self) -> Result<Vec<Report>, StorageError>;

    /// Lists reports whose `full_name` equals `full_name` exactly
    /// (case-sensitive, no partial matching).
    fn list_reports_by_name(&self, full_name: &str) -> Result<Vec<Report>, StorageError>;

    /// Permanently deletes a report. Other IDs are left untouched.
    fn delete_report(&mut self, id: ReportId) -> Result<(), StorageError>;

    /// Returns the number of stored reports.
    fn count_reports(&self) -> Result<u64, StorageError>;
}
