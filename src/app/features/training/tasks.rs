use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::app::{
    error::AppError,
    training::{summarize, Task, TaskSummary},
    AppState,
};

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
    pub summary: TaskSummary,
}

/// GET /api/training/tasks — Tasks derived from every plan that applies to the current user.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<TasksResponse>, AppError> {
    let workspace = state.workspace.read()?;
    let tasks = workspace.training.current_tasks();
    let summary = summarize(&tasks);
    Ok(Json(TasksResponse { tasks, summary }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/training/tasks", get(list_tasks))
}
