#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use gtrain::app::{
    advisory::{AdvisoryProvider, OfflineAdvisor},
    config::Config,
    workspace::{SharedWorkspace, Workspace},
    AppState,
};
use gtrain::create_router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_state(workspace: Workspace, advisor: Arc<dyn AdvisoryProvider>) -> AppState {
    AppState {
        workspace: SharedWorkspace::new(workspace),
        advisor,
        config: Config::for_tests(),
    }
}

/// Router over empty forests and no plans.
pub fn test_router() -> axum::Router {
    create_router(test_state(Workspace::empty(), Arc::new(OfflineAdvisor)))
}

/// Router over the demo organization, catalog, plans and user.
pub fn seeded_router() -> axum::Router {
    let mut workspace = Workspace::empty();
    gtrain::seeds::run_seeds(&mut workspace).unwrap();
    create_router(test_state(workspace, Arc::new(OfflineAdvisor)))
}

pub fn router_with_advisor(advisor: Arc<dyn AdvisoryProvider>) -> axum::Router {
    create_router(test_state(Workspace::empty(), advisor))
}

/// Send a JSON request (or no body) and decode the JSON response; empty bodies decode as Null.
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (http::StatusCode, serde_json::Value) {
    let mut builder = http::Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, body)
}

/// Send a raw text body and return status, headers and the body as text.
pub async fn send_text(
    app: &axum::Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: String,
) -> (http::StatusCode, http::HeaderMap, String) {
    let request = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send raw bytes with `content_type` and decode the JSON response.
pub async fn send_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: Vec<u8>,
) -> (http::StatusCode, serde_json::Value) {
    let request = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

pub async fn get_text(app: &axum::Router, uri: &str) -> (http::StatusCode, http::HeaderMap, String) {
    let request = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Depth-first lookup of a node by code in a `GET /api/hierarchy/:domain` response.
pub fn node_by_code<'a>(nodes: &'a serde_json::Value, code: &str) -> Option<&'a serde_json::Value> {
    for node in nodes.as_array()? {
        if node["code"] == code {
            return Some(node);
        }
        if let Some(found) = node_by_code(&node["children"], code) {
            return Some(found);
        }
    }
    None
}

/// Id of the seeded organization unit with `code`.
pub async fn org_id(app: &axum::Router, code: &str) -> String {
    let (_, tree) = send_json(app, "GET", "/api/hierarchy/organization", None).await;
    node_by_code(&tree["nodes"], code)
        .and_then(|n| n["id"].as_str())
        .expect("seeded organization unit")
        .to_string()
}

/// Id of the seeded catalog course with `code`.
pub async fn course_id(app: &axum::Router, code: &str) -> String {
    let (_, courses) = send_json(app, "GET", "/api/courses", None).await;
    courses
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["code"] == code)
        .and_then(|c| c["id"].as_str())
        .expect("seeded course")
        .to_string()
}

pub async fn create_node(app: &axum::Router, domain: &str, name: &str, after_id: Option<&str>) -> serde_json::Value {
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/hierarchy/{}/nodes", domain),
        Some(serde_json::json!({ "name": name, "after_id": after_id })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "{}", body);
    body
}

pub async fn create_child(app: &axum::Router, domain: &str, parent_id: &str, name: &str) -> serde_json::Value {
    let (status, body) = send_json(
        app,
        "POST",
        &format!("/api/hierarchy/{}/nodes/{}/children", domain, parent_id),
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "{}", body);
    body
}
