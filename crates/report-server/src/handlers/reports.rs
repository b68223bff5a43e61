//! JSON report handlers (list, get, create, delete).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use report_storage::ReportId;

use crate::error::ApiError;
use crate::schema::reports::{CreateReportRequest, ReportView};
use crate::state::AppState;

/// Lists all reports.
///
/// `GET /api/reports`
pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportView>>, ApiError> {
    let service = state.service.lock().await;
    let reports = service.list_reports()?;
    Ok(Json(reports.into_iter().map(ReportView::from).collect()))
}

/// Fetches one report.
///
/// `GET /api/reports/{id}`
pub async fn get_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ReportView>, ApiError> {
    let id = report_id(id)?;
    let service = state.service.lock().await;
    Ok(Json(service.get_report(id)?.into()))
}

/// Creates a report from a JSON body.
///
/// `POST /api/reports` -> 201 with the stored report.
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportView>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let mut service = state.service.lock().await;
    let report = service.create_report(req.into())?;
    Ok((StatusCode::CREATED, Json(report.into())))
}

/// Deletes a report.
///
/// `DELETE /api/reports/{id}` -> 204 with an empty body.
pub async fn delete_report(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = report_id(id)?;
    let mut service = state.service.lock().await;
    service.delete_report(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// A path segment that is not an integer cannot name a report.
fn report_id(path: Result<Path<i64>, PathRejection>) -> Result<ReportId, ApiError> {
    match path {
        Ok(Path(id)) => Ok(ReportId(id)),
        Err(rejection) => Err(ApiError::NotFound(format!(
            "no report at this path: {}",
            rejection.body_text()
        ))),
    }
}
