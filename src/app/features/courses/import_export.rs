//! Question bank files: template download, CSV or JSON export and CSV import.

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::helpers::find_course;
use crate::app::extract::{AppPath, AppQuery, TextBody};
use crate::app::{
    audit::{AuditModule, Severity},
    csv_text,
    error::AppError,
    features::attachment::{attachment, dated_filename, CSV_CONTENT_TYPE, JSON_CONTENT_TYPE},
    question_bank::csv::{self, ImportReport},
    AppState,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/questions/template — Blank import template with one example per question type.
pub async fn download_template() -> Response {
    attachment(csv::template(), CSV_CONTENT_TYPE, "question_import_template.csv")
}

/// GET /api/courses/:id/questions/export?format=csv|json — All questions of a course.
pub async fn export_questions(
    State(state): State<AppState>,
    AppPath(course_id): AppPath<String>,
    AppQuery(query): AppQuery<ExportQuery>,
) -> Result<Response, AppError> {
    let (body, code) = {
        let workspace = state.workspace.read()?;
        let course = find_course(&workspace.training, &course_id)?;
        let questions = workspace.questions.for_course(&course.id);
        if questions.is_empty() {
            return Err(AppError::Validation("Course has no questions to export".to_string()));
        }
        let body = match query.format {
            ExportFormat::Csv => csv::export_csv(&questions),
            ExportFormat::Json => serde_json::to_string_pretty(&questions).map_err(|e| {
                tracing::error!(error = %e, "question export serialization failed");
                AppError::Internal
            })?,
        };
        (body, course.code.clone())
    };

    let response = match query.format {
        ExportFormat::Csv => attachment(body, CSV_CONTENT_TYPE, &dated_filename("questions", &code, "csv")?),
        ExportFormat::Json => attachment(body, JSON_CONTENT_TYPE, &dated_filename("questions", &code, "json")?),
    };
    Ok(response)
}

/// POST /api/courses/:id/questions/import — CSV body; valid rows are added, invalid rows reported.
pub async fn import_questions(
    State(state): State<AppState>,
    AppPath(course_id): AppPath<String>,
    TextBody(body): TextBody,
) -> Result<Json<ImportReport>, AppError> {
    if csv_text::is_blank(&body) {
        return Err(AppError::Validation("CSV body is empty".to_string()));
    }

    let mut workspace = state.workspace.write()?;
    let course = find_course(&workspace.training, &course_id)?;
    let (course_id, course_code) = (course.id.clone(), course.code.clone());

    let report = {
        let existing = workspace.questions.for_course(&course_id);
        csv::import_csv(&body, &course_id, &existing)
    };
    workspace.questions.add_all(report.imported.iter().cloned());
    workspace.record_audit(
        "IMPORT_QUESTIONS",
        AuditModule::Course,
        Severity::Info,
        format!("Imported {} questions into course {}", report.imported.len(), course_code),
    );

    Ok(Json(report))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/questions/template", get(download_template))
        .route("/api/courses/:id/questions/export", get(export_questions))
        .route("/api/courses/:id/questions/import", post(import_questions))
}
