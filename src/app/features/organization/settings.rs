use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::app::extract::{AppJson, AppPath};
use crate::app::{
    domain::RiskLevel,
    error::AppError,
    features::hierarchy::{helpers::parse_node_id, types::NodeResponse},
    hierarchy::{
        org_settings::{self, CompanyView, NewCompany, NewDepartment, NewPosition},
        HierarchyNode,
    },
    AppState,
};

/// Request body for a new company (a root of the organization forest).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255), custom(function = "crate::app::features::hierarchy::helpers::validate_name"))]
    pub name: String,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 255))]
    pub manager: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 255), custom(function = "crate::app::features::hierarchy::helpers::validate_name"))]
    pub name: String,
    #[validate(length(max = 255))]
    pub manager: Option<String>,
    #[serde(default)]
    pub is_gxp: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePositionRequest {
    #[validate(length(min = 1, max = 255), custom(function = "crate::app::features::hierarchy::helpers::validate_name"))]
    pub name: String,
    pub risk_level: RiskLevel,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn created(node: &HierarchyNode) -> (StatusCode, Json<NodeResponse>) {
    (StatusCode::CREATED, Json(NodeResponse::from_node(node, &Default::default())))
}

/// GET /api/org/companies — Companies with their departments and positions.
pub async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<CompanyView>>, AppError> {
    let workspace = state.workspace.read()?;
    Ok(Json(org_settings::companies(&workspace.hierarchy)))
}

/// POST /api/org/companies — Add a company.
pub async fn create_company(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let new = NewCompany {
        name: request.name.trim().to_string(),
        address: non_blank(request.address),
        manager: non_blank(request.manager),
    };

    let mut workspace = state.workspace.write()?;
    let node = org_settings::add_company(&mut workspace.hierarchy, new)?;
    Ok(created(&node))
}

/// POST /api/org/companies/:id/departments — Add a department under a company.
pub async fn create_department(
    State(state): State<AppState>,
    AppPath(company_id): AppPath<String>,
    AppJson(request): AppJson<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let company_id = parse_node_id(&company_id)?;
    let new = NewDepartment {
        name: request.name.trim().to_string(),
        manager: non_blank(request.manager),
        is_gxp: request.is_gxp,
    };

    let mut workspace = state.workspace.write()?;
    let node = org_settings::add_department(&mut workspace.hierarchy, &company_id, new)?;
    Ok(created(&node))
}

/// POST /api/org/departments/:id/positions — Add a position under a department.
pub async fn create_position(
    State(state): State<AppState>,
    AppPath(department_id): AppPath<String>,
    AppJson(request): AppJson<CreatePositionRequest>,
) -> Result<(StatusCode, Json<NodeResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let department_id = parse_node_id(&department_id)?;
    let new = NewPosition {
        name: request.name.trim().to_string(),
        risk_level: request.risk_level,
    };

    let mut workspace = state.workspace.write()?;
    let node = org_settings::add_position(&mut workspace.hierarchy, &department_id, new)?;
    Ok(created(&node))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/org/companies", get(list_companies).post(create_company))
        .route("/api/org/companies/:id/departments", post(create_department))
        .route("/api/org/departments/:id/positions", post(create_position))
}
