//! Page handlers: submission form and report listings.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use crate::error::ApiError;
use crate::render;
use crate::schema::pages::{ByNameQuery, FormErrors, ListCriteria, ReportForm};
use crate::state::AppState;

/// Renders an empty submission form.
///
/// `GET /`
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    render::form_page(
        &ReportForm::default(),
        &FormErrors::default(),
        &state.forms.issue(),
    )
}

/// Validates a submitted form and stores the report.
///
/// `POST /`
///
/// Invalid submissions re-render the form with the entered values and field
/// messages (status 200); nothing is stored.
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<ReportForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(%rejection, "unreadable form submission");
            ReportForm::default()
        }
    };

    let errors = form.validate(&state.forms);
    if !errors.is_empty() {
        tracing::warn!(?errors, "report form rejected");
        return Ok(render::form_page(&form, &errors, &state.forms.issue()).into_response());
    }

    let mut service = state.service.lock().await;
    service.create_report(form.into_new_report())?;
    Ok(render::success_page().into_response())
}

/// Renders a report listing.
///
/// `GET /reports/all`, `GET /reports/by_name?name=...`
///
/// Any other criteria yields 400 `{"error": "Invalid criteria"}`. A missing
/// `name` filters by the empty name, which matches nothing. The query string
/// never fails the request: repeated `name` keys use the first value.
pub async fn list_reports(
    State(state): State<AppState>,
    Path(criteria): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let criteria: ListCriteria = criteria.parse()?;
    let query = match query {
        Ok(Query(pairs)) => ByNameQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "ignoring unreadable query string");
            ByNameQuery::default()
        }
    };
    let service = state.service.lock().await;
    match criteria {
        ListCriteria::All => {
            let reports = service.list_reports()?;
            Ok(render::all_reports_page(&reports))
        }
        ListCriteria::ByName => {
            let name = query.name.unwrap_or_default();
            let reports = service.list_reports_by_name(&name)?;
            Ok(render::reports_by_name_page(&name, &reports))
        }
    }
}
