use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use super::types::{DomainPathParams, TreeResponse};
use crate::app::extract::AppPath;
use crate::app::{error::AppError, AppState};

/// GET /api/hierarchy/:domain — The domain forest with expansion and selection.
pub async fn get_tree(
    State(state): State<AppState>,
    AppPath(params): AppPath<DomainPathParams>,
) -> Result<Json<TreeResponse>, AppError> {
    let workspace = state.workspace.read()?;
    Ok(Json(TreeResponse::from_store(&workspace.hierarchy, params.domain)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/hierarchy/:domain", get(get_tree))
}
