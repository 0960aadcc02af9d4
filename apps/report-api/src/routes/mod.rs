pub mod health;
pub mod reports;

use std::any::Any;

use axum::{response::IntoResponse, response::Response, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/reports/:company_name",
            get(reports::handle_get_report),
        )
        .route("/api/v1/companies", get(reports::handle_list_companies))
        .route(
            "/api/v1/companies/:company_name/feedback-count",
            get(reports::handle_feedback_count),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turns a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
