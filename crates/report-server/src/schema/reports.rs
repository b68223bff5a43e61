//! JSON request/response types for `/api/reports`.

use report_storage::{NewReport, Report, ReportId};
use serde::{Deserialize, Serialize};

/// Request to create a report. Both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    pub full_name: String,
    pub report_text: String,
}

impl From<CreateReportRequest> for NewReport {
    fn from(req: CreateReportRequest) -> Self {
        NewReport::new(req.full_name, req.report_text)
    }
}

/// A report as returned by the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub id: ReportId,
    pub full_name: String,
    pub report_text: String,
}

impl From<Report> for ReportView {
    fn from(report: Report) -> Self {
        ReportView {
            id: report.id,
            full_name: report.full_name,
            report_text: report.report_text,
        }
    }
}
