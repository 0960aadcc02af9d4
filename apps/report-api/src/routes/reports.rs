use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::report::plain_text::generate_plain_text_report;
use crate::report::Report;
use crate::service::{FeedbackCount, ReportMetadata};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
    #[serde(alias = "useAI", alias = "useAi")]
    pub use_ai: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ReportFormat {
    Json,
    Text,
}

impl ReportFormat {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("json") => Ok(ReportFormat::Json),
            Some("text") | Some("txt") => Ok(ReportFormat::Text),
            Some(other) => Err(AppError::Validation(format!(
                "Unsupported format '{other}', expected 'json' or 'text'"
            ))),
        }
    }
}

#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub data: Report,
    pub metadata: ReportMetadata,
}

/// GET /api/v1/reports/:company_name
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(company_name): Path<String>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let format = ReportFormat::parse(params.format.as_deref())?;
    let generated = state
        .reports
        .generate(&company_name, params.use_ai.unwrap_or(true))
        .await?;

    match format {
        ReportFormat::Json => Ok(Json(ReportResponse {
            success: true,
            data: generated.report,
            metadata: generated.metadata,
        })
        .into_response()),
        ReportFormat::Text => {
            let disposition = format!(
                "attachment; filename=\"{}_Feedback_Report.txt\"",
                attachment_stem(company_name.trim())
            );
            Ok((
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                generate_plain_text_report(&generated.report),
            )
                .into_response())
        }
    }
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<String>>>, AppError> {
    let companies = state.reports.list_companies().await?;
    Ok(Json(Envelope {
        success: true,
        data: companies,
    }))
}

/// GET /api/v1/companies/:company_name/feedback-count
pub async fn handle_feedback_count(
    State(state): State<AppState>,
    Path(company_name): Path<String>,
) -> Result<Json<Envelope<FeedbackCount>>, AppError> {
    let count = state.reports.feedback_count(&company_name).await?;
    Ok(Json(Envelope {
        success: true,
        data: count,
    }))
}

/// Keeps the filename header-safe: anything but ASCII alphanumerics, `-` and `.` becomes `_`.
fn attachment_stem(company_name: &str) -> String {
    company_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
