use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::app::{error::AppError, training::Course, AppState};

/// GET /api/courses — The course catalog.
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let workspace = state.workspace.read()?;
    Ok(Json(workspace.training.courses.clone()))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/courses", get(list_courses))
}
