use axum::{extract::State, routing::get, Json, Router};

use crate::app::extract::AppQuery;
use crate::app::{
    audit::{AuditFilter, AuditRecord},
    error::AppError,
    AppState,
};

/// GET /api/audit — Audit records, newest first, filtered by search text, module and severity.
pub async fn list_audit(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<AuditFilter>,
) -> Result<Json<Vec<AuditRecord>>, AppError> {
    let workspace = state.workspace.read()?;
    let records = workspace.audit.filter(&filter).into_iter().cloned().collect();
    Ok(Json(records))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/audit", get(list_audit))
}
