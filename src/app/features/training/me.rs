use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::app::extract::AppJson;
use crate::app::{
    domain::NodeId,
    error::AppError,
    hierarchy::{
        org_settings::{self, COMPANY_DEPTH, DEPARTMENT_DEPTH, POSITION_DEPTH},
        HierarchyStore,
    },
    training::UserProfile,
    AppState,
};

/// New organization coordinates for the current user. Omitted or null clears an axis.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub company_id: Option<String>,
    pub department_id: Option<String>,
    pub position_id: Option<String>,
}

fn coordinate(
    store: &HierarchyStore,
    raw: Option<&str>,
    depth: usize,
    label: &str,
) -> Result<Option<NodeId>, AppError> {
    raw.map(|raw| {
        NodeId::from_string(raw)
            .ok()
            .filter(|id| org_settings::is_unit_at(store, id, depth))
            .ok_or_else(|| AppError::Validation(format!("Unknown {}: {}", label, raw)))
    })
    .transpose()
}

/// GET /api/me — The signed-in user's profile.
pub async fn show_profile(State(state): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    let workspace = state.workspace.read()?;
    Ok(Json(workspace.training.current_user.clone()))
}

/// PUT /api/me — Move the current user within the organization. Their task list follows.
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let mut workspace = state.workspace.write()?;
    let org = &workspace.hierarchy;
    let company_id = coordinate(org, request.company_id.as_deref(), COMPANY_DEPTH, "company")?;
    let department_id = coordinate(org, request.department_id.as_deref(), DEPARTMENT_DEPTH, "department")?;
    let position_id = coordinate(org, request.position_id.as_deref(), POSITION_DEPTH, "position")?;

    let user = &mut workspace.training.current_user;
    user.company_id = company_id;
    user.department_id = department_id;
    user.position_id = position_id;
    tracing::info!(name = %user.name, "user organization updated");

    Ok(Json(user.clone()))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/me", get(show_profile).put(update_profile))
}
