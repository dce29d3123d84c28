use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;

use super::helpers::{resolve_courses, resolve_units};
use crate::app::extract::AppJson;
use crate::app::{
    audit::{AuditModule, Severity},
    domain::Priority,
    error::AppError,
    hierarchy::org_settings::{COMPANY_DEPTH, DEPARTMENT_DEPTH, POSITION_DEPTH},
    training::{NewPlan, PlanItem, PlanLevel, TrainingType},
    AppState,
};

/// Request body for a new annual plan. Years follow the plan selector (2026-2036).
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 255), custom(function = "crate::app::features::hierarchy::helpers::validate_name"))]
    pub title: String,
    #[validate(length(min = 1, max = 64))]
    pub code: String,
    #[validate(range(min = 2026, max = 2036))]
    pub year: i32,
    #[validate(range(min = 1, max = 12))]
    pub month: u8,
    pub level: PlanLevel,
    #[serde(default)]
    pub training_types: Vec<TrainingType>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub target_description: String,
    #[validate(length(min = 1, max = 255))]
    pub owner: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub target_company_ids: Vec<String>,
    #[serde(default)]
    pub target_department_ids: Vec<String>,
    #[serde(default)]
    pub target_position_ids: Vec<String>,
    #[validate(length(min = 1))]
    pub course_ids: Vec<String>,
}

/// POST /api/plans — Create a plan. It starts planned at 0%.
pub async fn create_plan(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePlanRequest>,
) -> Result<(StatusCode, Json<PlanItem>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let mut workspace = state.workspace.write()?;
    let org = &workspace.hierarchy;
    let new = NewPlan {
        title: request.title.trim().to_string(),
        code: request.code.trim().to_string(),
        year: request.year,
        month: request.month,
        level: request.level,
        training_types: request.training_types,
        target_description: request.target_description,
        owner: request.owner,
        priority: request.priority,
        target_company_ids: resolve_units(org, &request.target_company_ids, COMPANY_DEPTH, "company")?,
        target_department_ids: resolve_units(org, &request.target_department_ids, DEPARTMENT_DEPTH, "department")?,
        target_position_ids: resolve_units(org, &request.target_position_ids, POSITION_DEPTH, "position")?,
        course_ids: resolve_courses(&workspace.training, &request.course_ids)?,
    };

    let plan = PlanItem::create(new);
    workspace.training.plans.push(plan.clone());
    tracing::info!(plan_id = %plan.id, code = %plan.code, year = plan.year, courses = plan.course_ids.len(), "plan created");
    workspace.record_audit(
        "CREATE_PLAN",
        AuditModule::Plan,
        Severity::Info,
        format!("Created plan {} ({})", plan.code, plan.title),
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/plans", post(create_plan))
}
