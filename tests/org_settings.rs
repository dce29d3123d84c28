mod common;

use crate::common::*;

#[tokio::test]
async fn lists_seeded_companies_with_departments_and_positions() {
    let app = seeded_router();

    let (status, companies) = send_json(&app, "GET", "/api/org/companies", None).await;
    assert_eq!(status, http::StatusCode::OK);

    let companies = companies.as_array().unwrap();
    assert_eq!(companies.len(), 3);
    assert_eq!(companies[0]["code"], "01");
    assert_eq!(companies[0]["manager"], "Wang Limin");

    let departments = companies[0]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0]["is_gxp"], true);
    assert_eq!(departments[0]["is_open"], true);
    assert_eq!(departments[1]["is_open"], false);
    assert_eq!(departments[0]["positions"].as_array().unwrap().len(), 3);
    assert_eq!(departments[0]["positions"][0]["risk_level"], "High");
}

#[tokio::test]
async fn company_department_position_codes_follow_the_forest() {
    let app = seeded_router();

    let (status, company) = send_json(
        &app,
        "POST",
        "/api/org/companies",
        Some(serde_json::json!({ "name": "G-Pharma Hong Kong", "address": "Science Park", "manager": "" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(company["code"], "04");
    assert_eq!(company["address"], "Science Park");
    assert!(company.get("manager").is_none());

    let (status, department) = send_json(
        &app,
        "POST",
        &format!("/api/org/companies/{}/departments", company["id"].as_str().unwrap()),
        Some(serde_json::json!({ "name": "Production", "manager": "Zhou", "is_gxp": true })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(department["code"], "0401");

    let (status, position) = send_json(
        &app,
        "POST",
        &format!("/api/org/departments/{}/positions", department["id"].as_str().unwrap()),
        Some(serde_json::json!({ "name": "Line Operator", "risk_level": "Medium" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED);
    assert_eq!(position["code"], "040101");
    assert_eq!(position["risk_level"], "Medium");

    // Same data through the generic hierarchy manager.
    let (_, tree) = send_json(&app, "GET", "/api/hierarchy/organization", None).await;
    let node = node_by_code(&tree["nodes"], "040101").unwrap();
    assert_eq!(node["name"], "Line Operator");
}

#[tokio::test]
async fn generic_edits_show_up_in_org_settings() {
    let app = seeded_router();
    let company_id = org_id(&app, "02").await;

    let engineering = create_child(&app, "organization", &company_id, "Engineering").await;
    assert_eq!(engineering["code"], "0201");

    let (_, companies) = send_json(&app, "GET", "/api/org/companies", None).await;
    let departments = companies[1]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0]["name"], "Engineering");
    assert_eq!(departments[0]["is_gxp"], true);
}

#[tokio::test]
async fn departments_only_under_companies() {
    let app = seeded_router();
    let qa = org_id(&app, "0101").await;
    let company = org_id(&app, "01").await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/org/companies/{}/departments", qa),
        Some(serde_json::json!({ "name": "Nested" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("company"));

    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/org/departments/{}/positions", company),
        Some(serde_json::json!({ "name": "Operator", "risk_level": "Low" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_risk_level_is_rejected() {
    let app = seeded_router();
    let qa = org_id(&app, "0101").await;

    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/org/departments/{}/positions", qa),
        Some(serde_json::json!({ "name": "Operator", "risk_level": "Extreme" })),
    )
    .await;
    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Extreme"));
}

#[tokio::test]
async fn deleting_org_unit_warns_about_settings_and_plans() {
    let app = seeded_router();
    let qc = org_id(&app, "0102").await;

    let uri = format!("/api/hierarchy/organization/nodes/{}", qc);
    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, http::StatusCode::PRECONDITION_REQUIRED);
    let warning = body["warning"].as_str().unwrap();
    assert!(warning.starts_with("Warning: deleting [Quality Control (QC)]"));
    assert!(warning.contains("2 descendant"));

    let (status, _) = send_json(&app, "DELETE", &format!("{}?confirm=true", uri), None).await;
    assert_eq!(status, http::StatusCode::NO_CONTENT);

    let (_, companies) = send_json(&app, "GET", "/api/org/companies", None).await;
    assert_eq!(companies[0]["departments"].as_array().unwrap().len(), 1);
}
