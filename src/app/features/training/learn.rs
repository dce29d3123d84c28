use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::app::extract::AppJson;
use crate::app::{
    domain::{CourseId, PlanId},
    error::AppError,
    training::PlanItem,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct LearnRequest {
    pub plan_id: String,
    pub course_id: String,
}

/// POST /api/training/learn — One learning action on a task: advances the course by the
/// configured step and returns the plan with its recomputed progress.
pub async fn learn(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearnRequest>,
) -> Result<Json<PlanItem>, AppError> {
    let plan_id = PlanId::from_string(&request.plan_id)
        .map_err(|_| AppError::NotFound("Plan not found".to_string()))?;
    let course_id = CourseId::from_string(&request.course_id)
        .map_err(|_| AppError::Validation("Invalid course id".to_string()))?;

    let mut workspace = state.workspace.write()?;
    let plan = workspace
        .training
        .record_learning(&plan_id, &course_id, state.config.learning_step)?;

    Ok(Json(plan))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/training/learn", post(learn))
}
