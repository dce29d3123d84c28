use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::helpers::find_course;
use crate::app::extract::{AppJson, AppPath, AppQuery};
use crate::app::{
    error::AppError,
    features::hierarchy::types::ConfirmQuery,
    question_bank::Question,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct QuestionPathParams {
    pub id: String,
    pub question_id: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BulkDeleteRequest {
    #[validate(length(min = 1))]
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: usize,
}

/// GET /api/courses/:id/questions
pub async fn list_questions(
    State(state): State<AppState>,
    AppPath(course_id): AppPath<String>,
) -> Result<Json<Vec<Question>>, AppError> {
    let workspace = state.workspace.read()?;
    let course = find_course(&workspace.training, &course_id)?;
    let questions = workspace
        .questions
        .for_course(&course.id)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(questions))
}

/// DELETE /api/courses/:id/questions/:question_id — Requires `?confirm=true`.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(params): AppPath<QuestionPathParams>,
    AppQuery(query): AppQuery<ConfirmQuery>,
) -> Result<StatusCode, AppError> {
    let mut workspace = state.workspace.write()?;
    let course_id = find_course(&workspace.training, &params.id)?.id.clone();

    let exists = workspace
        .questions
        .for_course(&course_id)
        .iter()
        .any(|q| q.id == params.question_id);
    if !exists {
        return Err(AppError::NotFound("Question not found".to_string()));
    }
    if !query.confirm {
        return Err(AppError::ConfirmationRequired(
            "Delete this question? This cannot be undone.".to_string(),
        ));
    }

    workspace.questions.remove(&course_id, &[params.question_id.clone()]);
    tracing::info!(course_id = %course_id, question_id = %params.question_id, "question deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/courses/:id/questions/bulk-delete — Delete the listed questions; requires `?confirm=true`.
/// Ids that are not in the course are ignored.
pub async fn bulk_delete_questions(
    State(state): State<AppState>,
    AppPath(course_id): AppPath<String>,
    AppQuery(query): AppQuery<ConfirmQuery>,
    AppJson(request): AppJson<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Select at least one question".to_string()))?;

    let mut workspace = state.workspace.write()?;
    let course_id = find_course(&workspace.training, &course_id)?.id.clone();

    if !query.confirm {
        return Err(AppError::ConfirmationRequired(format!(
            "Delete {} selected question(s)? This cannot be undone.",
            request.ids.len()
        )));
    }

    let deleted = workspace.questions.remove(&course_id, &request.ids);
    tracing::info!(course_id = %course_id, requested = request.ids.len(), deleted, "questions bulk deleted");
    Ok(Json(BulkDeleteResponse { deleted }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/courses/:id/questions", get(list_questions))
        .route("/api/courses/:id/questions/:question_id", delete(delete_question))
        .route("/api/courses/:id/questions/bulk-delete", post(bulk_delete_questions))
}
