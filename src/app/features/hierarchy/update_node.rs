use axum::{
    extract::State,
    routing::patch,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::helpers::parse_node_id;
use super::types::{NodePathParams, NodeResponse};
use crate::app::extract::{AppJson, AppPath};
use crate::app::{error::AppError, AppState};

/// Request body for renaming a node. Code and children never change.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNodeRequest {
    #[validate(length(min = 1, max = 255), custom(function = "super::helpers::validate_name"))]
    pub name: String,
}

/// PATCH /api/hierarchy/:domain/nodes/:id — Rename a node.
pub async fn update_node(
    State(state): State<AppState>,
    AppPath(params): AppPath<NodePathParams>,
    AppJson(request): AppJson<UpdateNodeRequest>,
) -> Result<Json<NodeResponse>, AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Name must be 1-255 characters".to_string()))?;

    let id = parse_node_id(&params.id)?;

    let mut workspace = state.workspace.write()?;
    let node = workspace
        .hierarchy
        .rename(params.domain, &id, request.name.trim())?;
    let expansion = &workspace.hierarchy.view(params.domain).expansion;

    Ok(Json(NodeResponse::from_node(&node, expansion)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/hierarchy/:domain/nodes/:id", patch(update_node))
}
