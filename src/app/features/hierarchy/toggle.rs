use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::helpers::parse_node_id;
use super::types::{DomainPathParams, NodePathParams, TreeResponse};
use crate::app::extract::{AppJson, AppPath};
use crate::app::{error::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct ToggleAllRequest {
    pub open: bool,
}

/// POST /api/hierarchy/:domain/nodes/:id/toggle — Flip one node open/closed.
/// An id that is not in the forest leaves the tree as it was.
pub async fn toggle_node(
    State(state): State<AppState>,
    AppPath(params): AppPath<NodePathParams>,
) -> Result<Json<TreeResponse>, AppError> {
    let id = parse_node_id(&params.id)?;

    let mut workspace = state.workspace.write()?;
    workspace.hierarchy.toggle_open(params.domain, &id);

    Ok(Json(TreeResponse::from_store(&workspace.hierarchy, params.domain)))
}

/// POST /api/hierarchy/:domain/toggle-all — Expand or collapse every node.
pub async fn toggle_all(
    State(state): State<AppState>,
    AppPath(params): AppPath<DomainPathParams>,
    AppJson(request): AppJson<ToggleAllRequest>,
) -> Result<Json<TreeResponse>, AppError> {
    let mut workspace = state.workspace.write()?;
    workspace.hierarchy.toggle_all(params.domain, request.open);

    Ok(Json(TreeResponse::from_store(&workspace.hierarchy, params.domain)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hierarchy/:domain/nodes/:id/toggle", post(toggle_node))
        .route("/api/hierarchy/:domain/toggle-all", post(toggle_all))
}
