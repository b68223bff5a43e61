//! SQLite implementation of [`ReportStore`].
//!
//! [`SqliteStore`] persists reports in a SQLite database with WAL mode,
//! a transaction around every write, and automatic schema migrations.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::ReportStore;
use crate::types::{NewReport, Report, ReportId};

/// SQLite-backed implementation of [`ReportStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        tracing::debug!(path, "opened report database");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn row_to_report(row: &Row<'_>) -> rusqlite::Result<Report> {
        Ok(Report {
            id: ReportId(row.get(0)?),
            full_name: row.get(1)?,
            report_text: row.get(2)?,
        })
    }
}

impl ReportStore for SqliteStore {
    fn create_report(&mut self, report: &NewReport) -> Result<Report, StorageError> {
        report.validate()?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO reports (full_name, report_text) VALUES (?1, ?2)",
            params![report.full_name, report.report_text],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(report.clone().into_report(ReportId(id)))
    }

    fn get_report(&self, id: ReportId) -> Result<Report, StorageError> {
        self.conn
            .prepare_cached("SELECT id, full_name, report_text FROM reports WHERE id = ?1")?
            .query_row(params![id.0], Self::row_to_report)
            .optional()?
            .ok_or(StorageError::ReportNotFound(id.0))
    }

    fn list_reports(&self) -> Result<Vec<Report>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, full_name, report_text FROM reports ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_report)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn list_reports_by_name(&self, full_name: &str) -> Result<Vec<Report>, StorageError> {
        // `=` uses BINARY collation: exact, case-sensitive.
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, full_name, report_text FROM reports WHERE full_name = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![full_name], Self::row_to_report)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn delete_report(&mut self, id: ReportId) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM reports WHERE id = ?1", params![id.0])?;
        if deleted == 0 {
            return Err(StorageError::ReportNotFound(id.0));
        }
        tx.commit()?;
        Ok(())
    }

    fn count_reports(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = SqliteStore::in_memory().unwrap();
        let first = store.create_report(&NewReport::new("Artem", "Done task A")).unwrap();
        let second = store.create_report(&NewReport::new("Olga", "Done task B")).unwrap();
        assert_eq!(first.id, ReportId(1));
        assert_eq!(second.id, ReportId(2));
        assert_eq!(store.get_report(first.id).unwrap(), first);
    }

    #[test]
    fn create_rejects_empty_name_without_writing() {
        let mut store = SqliteStore::in_memory().unwrap();
        let err = store.create_report(&NewReport::new("", "text")).unwrap_err();
        assert!(matches!(err, StorageError::EmptyField { field: "full_name" }));
        assert_eq!(store.count_reports().unwrap(), 0);
    }

    #[test]
    fn list_by_name_matches_bytes_exactly() {
        let mut store = SqliteStore::in_memory().unwrap();
        for (name, text) in [
            ("Artem", "one"),
            ("ARTEM", "two"),
            ("Artem ", "three"),
            ("Artem", "four"),
        ] {
            store.create_report(&NewReport::new(name, text)).unwrap();
        }

        let texts: Vec<_> = store
            .list_reports_by_name("Artem")
            .unwrap()
            .into_iter()
            .map(|r| r.report_text)
            .collect();
        assert_eq!(texts, vec!["one", "four"]);
        assert!(store.list_reports_by_name("").unwrap().is_empty());
        assert!(store.list_reports_by_name("artem").unwrap().is_empty());
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = SqliteStore::in_memory().unwrap();
        let report = store.create_report(&NewReport::new("Artem", "Done task A")).unwrap();
        store.delete_report(report.id).unwrap();

        assert!(matches!(
            store.get_report(report.id),
            Err(StorageError::ReportNotFound(1))
        ));
        assert!(matches!(
            store.delete_report(report.id),
            Err(StorageError::ReportNotFound(1))
        ));
        assert!(store.list_reports().unwrap().is_empty());
    }

    #[test]
    fn newest_id_is_not_reused_after_delete() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.create_report(&NewReport::new("a", "1")).unwrap();
        let second = store.create_report(&NewReport::new("b", "2")).unwrap();
        store.delete_report(second.id).unwrap();

        let third = store.create_report(&NewReport::new("c", "3")).unwrap();
        assert_eq!(third.id, ReportId(3));
    }

    #[test]
    fn reports_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.db");
        let path = path.to_str().unwrap();

        {
            let mut store = SqliteStore::new(path).unwrap();
            store.create_report(&NewReport::new("Artem", "Done task A")).unwrap();
        }

        let store = SqliteStore::new(path).unwrap();
        let reports = store.list_reports().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].full_name, "Artem");
        assert_eq!(store.count_reports().unwrap(), 1);
    }
}
