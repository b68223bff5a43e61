//! HTTP server for submitting and browsing reports.
//!
//! Serves two surfaces over one [`ReportService`](service::ReportService):
//! HTML pages (submission form and listings) and a small JSON API under
//! `/api/reports`. This crate contains the router, handlers, request and
//! response schema types, page rendering, form tokens and configuration.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod render;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
