//! Storage abstraction for submitted reports.
//!
//! Provides the [`ReportStore`] trait defining the storage contract that all
//! backends implement, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: ReportId, Report, NewReport storage-layer types
//! - [`traits`]: ReportStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::ReportStore;
pub use types::{NewReport, Report, ReportId};
