//! HTTP handler modules.
//!
//! Handlers parse requests, acquire the service lock, delegate to
//! [`ReportService`](crate::service::ReportService), and format the result as
//! a rendered page or JSON. No business logic lives in handlers.

pub mod pages;
pub mod reports;
