//! Storage-layer types for report identity and content.
//!
//! [`ReportId`] lives here because identity is a storage concern: a report
//! only gains an ID when persisted, and callers can never choose one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Unique identifier for a stored report.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`. Serializes as
/// a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub i64);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportId({})", self.0)
    }
}

/// A persisted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Store-assigned identifier.
    pub id: ReportId,
    /// Submitter's full name.
    pub full_name: String,
    /// Free-text report content.
    pub report_text: String,
}

/// Input for creating a report. Carries no ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub full_name: String,
    pub report_text: String,
}

impl NewReport {
    pub fn new(full_name: impl Into<String>, report_text: impl Into<String>) -> Self {
        NewReport {
            full_name: full_name.into(),
            report_text: report_text.into(),
        }
    }

    /// Checks that both fields are non-empty.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.full_name.is_empty() {
            return Err(StorageError::EmptyField { field: "full_name" });
        }
        if self.report_text.is_empty() {
            return Err(StorageError::EmptyField {
                field: "report_text",
            });
        }
        Ok(())
    }

    /// Attaches a freshly assigned ID.
    pub(crate) fn into_report(self, id: ReportId) -> Report {
        Report {
            id,
            full_name: self.full_name,
            report_text: self.report_text,
        }
    }
}
