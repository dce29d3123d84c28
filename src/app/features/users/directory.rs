use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::app::extract::{AppJson, AppPath, AppQuery};
use crate::app::{
    accounts::{AccountStatus, NewAccount, UserAccount, UserFilter},
    audit::{AuditModule, Severity},
    domain::{Role, UserId},
    error::AppError,
    features::hierarchy::helpers::{parse_node_id, validate_name},
    hierarchy::org_settings::{self, Placement},
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255), custom(function = "validate_name"))]
    pub name: String,
    #[validate(length(min = 1, max = 64), custom(function = "validate_name"))]
    pub username: String,
    #[validate(length(min = 1, max = 64), custom(function = "validate_name"))]
    pub employee_id: String,
    #[serde(default)]
    pub role: Role,
    pub company_id: String,
    pub department_id: String,
    pub position_id: String,
}

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    UserId::from_string(raw).map_err(|_| AppError::NotFound("User not found".to_string()))
}

/// GET /api/users — Accounts filtered by search text, role, status and company.
pub async fn list_users(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<UserFilter>,
) -> Result<Json<Vec<UserAccount>>, AppError> {
    let workspace = state.workspace.read()?;
    let users = workspace.accounts.filter(&filter).into_iter().cloned().collect();
    Ok(Json(users))
}

/// POST /api/users — Enrol a trainee at a company / department / position.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserAccount>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let placement = Placement {
        company_id: parse_node_id(&request.company_id)?,
        department_id: parse_node_id(&request.department_id)?,
        position_id: parse_node_id(&request.position_id)?,
    };

    let mut workspace = state.workspace.write()?;
    org_settings::check_placement(&workspace.hierarchy, &placement)?;
    let account = workspace.accounts.add(NewAccount {
        name: request.name.trim().to_string(),
        username: request.username.trim().to_string(),
        employee_id: request.employee_id.trim().to_string(),
        role: request.role,
        placement,
    })?;
    workspace.record_audit(
        "ADD_USER",
        AuditModule::User,
        Severity::Info,
        format!("Enrolled trainee {} [{}]", account.name, account.employee_id),
    );

    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /api/users/:id/toggle-status — Suspend an active account or reactivate a suspended one.
pub async fn toggle_user_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<UserAccount>, AppError> {
    let id = parse_user_id(&id)?;

    let mut workspace = state.workspace.write()?;
    let account = workspace.accounts.toggle_status(&id)?;
    let (action, severity) = match account.status {
        AccountStatus::Suspended => ("SUSPEND_ACCOUNT", Severity::Danger),
        AccountStatus::Active => ("ACTIVATE_ACCOUNT", Severity::Info),
    };
    workspace.record_audit(
        action,
        AuditModule::User,
        severity,
        format!("Account [{}] is now {}", account.name, account.status),
    );

    Ok(Json(account))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id/toggle-status", post(toggle_user_status))
}
