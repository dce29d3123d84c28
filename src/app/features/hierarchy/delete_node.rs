use axum::{
    extract::State,
    http::StatusCode,
    routing::delete,
    Router,
};

use super::helpers::parse_node_id;
use super::types::{ConfirmQuery, NodePathParams};
use crate::app::extract::{AppPath, AppQuery};
use crate::app::{error::AppError, hierarchy::DeleteOutcome, AppState};

/// DELETE /api/hierarchy/:domain/nodes/:id — Delete a node and its subtree.
/// Without `?confirm=true` nothing changes and the warning comes back with 428.
pub async fn delete_node(
    State(state): State<AppState>,
    AppPath(params): AppPath<NodePathParams>,
    AppQuery(query): AppQuery<ConfirmQuery>,
) -> Result<StatusCode, AppError> {
    let id = parse_node_id(&params.id)?;
    let confirmed = |_: &str| query.confirm;

    let mut workspace = state.workspace.write()?;
    match workspace.hierarchy.delete(params.domain, &id, &confirmed)? {
        DeleteOutcome::Deleted(_) => Ok(StatusCode::NO_CONTENT),
        DeleteOutcome::Declined { warning } => Err(AppError::ConfirmationRequired(warning)),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/hierarchy/:domain/nodes/:id", delete(delete_node))
}
