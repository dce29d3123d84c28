use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::app::extract::AppQuery;
use crate::app::{
    error::AppError,
    training::{filter_plans, PlanFilter, PlanItem},
    AppState,
};

/// GET /api/plans — Plans filtered by level, company and year.
pub async fn list_plans(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<PlanFilter>,
) -> Result<Json<Vec<PlanItem>>, AppError> {
    let workspace = state.workspace.read()?;
    let plans = filter_plans(&workspace.training.plans, &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(plans))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/plans", get(list_plans))
}
