use axum::{
    extract::State,
    http::StatusCode,
    routing::put,
    Json, Router,
};
use serde::Deserialize;

use super::helpers::parse_node_id;
use super::types::{ConfirmQuery, DomainPathParams, TreeResponse};
use crate::app::extract::{AppJson, AppPath, AppQuery};
use crate::app::{error::AppError, hierarchy::DeleteOutcome, AppState};

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub node_id: Option<String>,
}

/// PUT /api/hierarchy/:domain/selection — Select a node, or clear with `null`.
pub async fn select_node(
    State(state): State<AppState>,
    AppPath(params): AppPath<DomainPathParams>,
    AppJson(request): AppJson<SelectRequest>,
) -> Result<Json<TreeResponse>, AppError> {
    let id = request.node_id.as_deref().map(parse_node_id).transpose()?;

    let mut workspace = state.workspace.write()?;
    workspace.hierarchy.select(params.domain, id)?;

    Ok(Json(TreeResponse::from_store(&workspace.hierarchy, params.domain)))
}

/// DELETE /api/hierarchy/:domain/selection — Keyboard delete of the selected node.
/// With nothing (or a vanished node) selected this is a no-op.
pub async fn delete_selected(
    State(state): State<AppState>,
    AppPath(params): AppPath<DomainPathParams>,
    AppQuery(query): AppQuery<ConfirmQuery>,
) -> Result<StatusCode, AppError> {
    let confirmed = |_: &str| query.confirm;

    let mut workspace = state.workspace.write()?;
    match workspace.hierarchy.delete_selected(params.domain, &confirmed)? {
        None | Some(DeleteOutcome::Deleted(_)) => Ok(StatusCode::NO_CONTENT),
        Some(DeleteOutcome::Declined { warning }) => Err(AppError::ConfirmationRequired(warning)),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/hierarchy/:domain/selection",
        put(select_node).delete(delete_selected),
    )
}
