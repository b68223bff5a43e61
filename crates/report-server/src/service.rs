//! ReportService: the single coordinator between HTTP handlers and the
//! report store.
//!
//! Handlers stay thin; every store call goes through [`ReportService`],
//! which also owns the logging for writes.

use report_storage::{InMemoryStore, NewReport, Report, ReportId, ReportStore, SqliteStore};

use crate::error::ApiError;

/// Owns the storage backend for the lifetime of the server.
pub struct ReportService {
    store: Box<dyn ReportStore + Send>,
}

impl ReportService {
    /// Opens (or creates) the SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Uses an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory()?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Uses the non-SQL [`InMemoryStore`] backend.
    pub fn ephemeral() -> Self {
        Self::with_store(Box::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Box<dyn ReportStore + Send>) -> Self {
        ReportService { store }
    }

    pub fn create_report(&mut self, report: NewReport) -> Result<Report, ApiError> {
        let created = self.store.create_report(&report)?;
        tracing::info!(id = created.id.0, full_name = %created.full_name, "report created");
        Ok(created)
    }

    pub fn get_report(&self, id: ReportId) -> Result<Report, ApiError> {
        tracing::debug!(id = id.0, "fetching report");
        Ok(self.store.get_report(id)?)
    }

    pub fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        Ok(self.store.list_reports()?)
    }

    pub fn list_reports_by_name(&self, full_name: &str) -> Result<Vec<Report>, ApiError> {
        let reports = self.store.list_reports_by_name(full_name)?;
        tracing::debug!(full_name, matches = reports.len(), "filtered reports by name");
        Ok(reports)
    }

    pub fn delete_report(&mut self, id: ReportId) -> Result<(), ApiError> {
        self.store.delete_report(id)?;
        tracing::info!(id = id.0, "report deleted");
        Ok(())
    }

    pub fn count_reports(&self) -> Result<u64, ApiError> {
        Ok(self.store.count_reports()?)
    }
}
