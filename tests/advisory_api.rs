use std::sync::Arc;

use gtrain::app::advisory::{AdvisoryError, AdvisoryProvider, ADVICE_FALLBACK};

mod common;

use crate::common::*;

struct Unreachable;

#[async_trait::async_trait]
impl AdvisoryProvider for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::Network("connection refused".to_string()))
    }
}

#[tokio::test]
async fn offline_advisor_returns_advice() {
    let app = test_router();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/advisory/compliance",
        Some(serde_json::json!({ "risk_data": { "overdue_trainings": 12, "open_deviations": 3 } })),
    )
    .await;

    assert_eq!(status, http::StatusCode::OK);
    let advice = body["advice"].as_str().unwrap();
    assert_ne!(advice, ADVICE_FALLBACK);
    assert_eq!(advice.lines().count(), 3);
}

#[tokio::test]
async fn provider_failure_returns_fallback_text() {
    let app = router_with_advisor(Arc::new(Unreachable));
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/advisory/compliance",
        Some(serde_json::json!({ "risk_data": [] })),
    )
    .await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["advice"], ADVICE_FALLBACK);
}

#[tokio::test]
async fn service_index_names_the_app() {
    let app = test_router();
    let (status, body) = send_json(&app, "GET", "/", None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["app_name"], "G-Train");
}
