use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::app::extract::AppJson;
use crate::app::{advisory::compliance_advice, AppState};

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub risk_data: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// POST /api/advisory/compliance — Audit-readiness advice for the given risk data.
/// Provider failures come back as the fallback text, never as an error status.
pub async fn compliance(
    State(state): State<AppState>,
    AppJson(request): AppJson<AdviceRequest>,
) -> Json<AdviceResponse> {
    let advice = compliance_advice(state.advisor.as_ref(), &request.risk_data).await;
    Json(AdviceResponse { advice })
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/advisory/compliance", post(compliance))
}
