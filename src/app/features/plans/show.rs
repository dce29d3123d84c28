use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use super::helpers::parse_plan_id;
use crate::app::extract::AppPath;
use crate::app::{error::AppError, training::PlanItem, AppState};

/// GET /api/plans/:id
pub async fn show_plan(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<PlanItem>, AppError> {
    let id = parse_plan_id(&id)?;
    let workspace = state.workspace.read()?;
    let plan = workspace
        .training
        .plan(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;
    Ok(Json(plan))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/plans/:id", get(show_plan))
}
