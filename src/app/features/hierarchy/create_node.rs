use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::helpers::parse_node_id;
use super::types::{DomainPathParams, NodePathParams, NodeResponse};
use crate::app::extract::{AppJson, AppPath};
use crate::app::{
    domain::HierarchyDomain,
    error::AppError,
    hierarchy::{HierarchyNode, NewNode, NodeAttributes},
    AppState,
};

/// Request body for adding a sibling (or a root when `after_id` is omitted).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNodeRequest {
    #[validate(length(min = 1, max = 255), custom(function = "super::helpers::validate_name"))]
    pub name: String,
    pub after_id: Option<String>,
}

/// Request body for adding a child.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChildRequest {
    #[validate(length(min = 1, max = 255), custom(function = "super::helpers::validate_name"))]
    pub name: String,
}

/// Nodes added from the generic manager into the organization forest are GxP-relevant by default.
fn new_node(domain: HierarchyDomain, name: &str) -> NewNode {
    let attributes = NodeAttributes {
        is_gxp: domain == HierarchyDomain::Organization,
        ..NodeAttributes::default()
    };
    NewNode::named(name.trim()).with_attributes(attributes)
}

fn created(node: &HierarchyNode) -> (StatusCode, Json<NodeResponse>) {
    // Fresh leaves have no collapsed state yet.
    let response = NodeResponse::from_node(node, &Default::default());
    (StatusCode::CREATED, Json(response))
}

/// POST /api/hierarchy/:domain/nodes — Add a root, or a sibling after `after_id`.
pub async fn create_node(
    State(state): State<AppState>,
    AppPath(params): AppPath<DomainPathParams>,
    AppJson(request): AppJson<CreateNodeRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Name must be 1-255 characters".to_string()))?;

    let after = request.after_id.as_deref().map(parse_node_id).transpose()?;

    let mut workspace = state.workspace.write()?;
    let node = workspace
        .hierarchy
        .add_sibling(params.domain, after.as_ref(), new_node(params.domain, &request.name))?;

    Ok(created(&node))
}

/// POST /api/hierarchy/:domain/nodes/:id/children — Append a child and open the parent.
pub async fn create_child(
    State(state): State<AppState>,
    AppPath(params): AppPath<NodePathParams>,
    AppJson(request): AppJson<CreateChildRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Name must be 1-255 characters".to_string()))?;

    let parent = parse_node_id(&params.id)?;

    let mut workspace = state.workspace.write()?;
    let node = workspace
        .hierarchy
        .add_child(params.domain, &parent, new_node(params.domain, &request.name))?;

    Ok(created(&node))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hierarchy/:domain/nodes", post(create_node))
        .route("/api/hierarchy/:domain/nodes/:id/children", post(create_child))
}
