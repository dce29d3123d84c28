//! Trainee CSV template download and bulk import.

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};

use crate::app::extract::TextBody;
use crate::app::{
    accounts::csv::{self, TraineeImportReport},
    audit::{AuditModule, Severity},
    csv_text,
    error::AppError,
    features::attachment::{attachment, CSV_CONTENT_TYPE},
    AppState,
};

/// GET /api/users/template — Import template with one example trainee.
pub async fn download_template() -> Response {
    attachment(csv::template(), CSV_CONTENT_TYPE, "trainee_import_template.csv")
}

/// POST /api/users/import — CSV body; valid rows are enrolled, the rest reported by row and field.
pub async fn import_users(
    State(state): State<AppState>,
    TextBody(body): TextBody,
) -> Result<Json<TraineeImportReport>, AppError> {
    if csv_text::is_blank(&body) {
        return Err(AppError::Validation("CSV body is empty".to_string()));
    }

    let mut workspace = state.workspace.write()?;
    let (accounts, report) = csv::import_csv(&body, &workspace.hierarchy, &workspace.accounts);
    workspace.accounts = accounts;

    let severity = if report.failures.is_empty() {
        Severity::Info
    } else {
        Severity::Warning
    };
    workspace.record_audit(
        "IMPORT_USERS",
        AuditModule::User,
        severity,
        format!(
            "Bulk import: {} of {} rows enrolled, {} failed, {} duplicate",
            report.imported.len(),
            report.total,
            report.failures.len(),
            report.duplicates.len()
        ),
    );

    Ok(Json(report))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/template", get(download_template))
        .route("/api/users/import", post(import_users))
}
