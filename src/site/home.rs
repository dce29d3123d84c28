use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::{AppState, APP_NAME};

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub app_name: &'static str,
    pub version: &'static str,
}

/// GET /
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        app_name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes for the home feature slice.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
