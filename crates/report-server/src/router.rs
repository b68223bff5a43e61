//! Router assembly.
//!
//! [`build_router`] wires all handler functions to their routes with a
//! tracing middleware layer.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax. The JSON routes allow
/// cross-origin callers; the page routes do not.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/reports",
            get(handlers::reports::list_reports).post(handlers::reports::create_report),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::reports::get_report).delete(handlers::reports::delete_report),
        )
        .layer(CorsLayer::permissive());

    Router::new()
        // Page surface
        .route(
            "/",
            get(handlers::pages::show_form).post(handlers::pages::submit_form),
        )
        .route("/reports/{criteria}", get(handlers::pages::list_reports))
        // JSON surface
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
