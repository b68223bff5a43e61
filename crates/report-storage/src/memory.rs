//! In-memory implementation of [`ReportStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and anywhere
//! persistence isn't needed. It has identical semantics to the SQLite
//! backend, including never reusing a deleted ID.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::traits::ReportStore;
use crate::types::{NewReport, Report, ReportId};

/// Reports keyed by ID. A `BTreeMap` iterates in insertion order because IDs
/// only grow.
#[derive(Debug)]
pub struct InMemoryStore {
    reports: BTreeMap<ReportId, Report>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            reports: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for InMemoryStore {
    fn create_report(&mut self, report: &NewReport) -> Result<Report, StorageError> {
        report.validate()?;
        let id = ReportId(self.next_id);
        self.next_id += 1;
        let stored = report.clone().into_report(id);
        self.reports.insert(id, stored.clone());
        Ok(stored)
    }

    fn get_report(&self, id: ReportId) -> Result<Report, StorageError> {
        self.reports
            .get(&id)
            .cloned()
            .ok_or(StorageError::ReportNotFound(id.0))
    }

    fn list_reports(&self) -> Result<Vec<Report>, StorageError> {
        Ok(self.reports.values().cloned().collect())
    }

    fn list_reports_by_name(&self, full_name: &str) -> Result<Vec<Report>, StorageError> {
        Ok(self
            .reports
            .values()
            .filter(|r| r.full_name == full_name)
            .cloned()
            .collect())
    }

    fn delete_report(&mut self, id: ReportId) -> Result<(), StorageError> {
        self.reports
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::ReportNotFound(id.0))
    }

    fn count_reports(&self) -> Result<u64, StorageError> {
        Ok(self.reports.len() as u64)
    }
}
