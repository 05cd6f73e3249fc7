use std::sync::Arc;

use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use hypertension_guide_domain::testing::{create_mock_health_service, MockAssessmentService};

use super::{body_string, get, json_post};
use crate::api::handlers::assessment::AssessmentService;
use crate::api::routes::create_app_with_services;
use crate::config::ApiConfig;

fn app_with(service: AssessmentService) -> axum::Router {
    create_app_with_services(
        &ApiConfig::default(),
        service,
        Arc::new(create_mock_health_service()),
    )
}

#[tokio::test]
async fn test_assessment_returns_derived_results() {
    let mock = Arc::new(MockAssessmentService::new());
    let app = app_with(mock.clone());

    let request = json_post(
        "/api/v1/assessments",
        json!({
            "name": "Test Patient",
            "age": 70,
            "sex": "male",
            "weight_kg": 100.0,
            "height_cm": 180.0,
            "systolic": 165,
            "diastolic": 100,
            "comorbidities": { "diabetes": true },
            "risk_factors": { "smoking": true }
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["blood_pressure"]["category"], "Stage 2 Hypertension");
    assert_eq!(body["risk"]["score"], 13);
    assert_eq!(body["risk"]["category"], "Very High Risk");
    assert_eq!(body["target"]["systolic"], 130);
    assert_eq!(body["monitoring"]["schedule"], "intensive");
    assert_eq!(body["bmi"], 30.86);
    assert!(body["report"].as_str().unwrap().contains("HYPERTENSION ASSESSMENT REPORT"));
    assert!(body["assessment_id"].is_string());

    assert_eq!(mock.assess_calls(), 1);
}

#[tokio::test]
async fn test_empty_body_uses_defaults() {
    let app = app_with(Arc::new(MockAssessmentService::new()));

    let response = app.oneshot(json_post("/api/v1/assessments", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["blood_pressure"]["category"], "Stage 1 Hypertension");
    assert_eq!(body["bmi"], 0.0);
    assert_eq!(body["treatment"]["approach"], "lifestyle_first");
}

#[tokio::test]
async fn test_out_of_range_fields_rejected() {
    let mock = Arc::new(MockAssessmentService::new());
    let app = app_with(mock.clone());

    let response = app
        .oneshot(json_post("/api/v1/assessments", json!({ "age": 0, "systolic": 300 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]["age"].is_array());
    assert!(body["details"]["systolic"].is_array());
    assert_eq!(mock.assess_calls(), 0);
}

#[tokio::test]
async fn test_report_is_plain_text_download() {
    let app = app_with(Arc::new(MockAssessmentService::new().with_report("CANNED REPORT")));

    let response = app
        .oneshot(json_post("/api/v1/assessments/report", json!({ "systolic": 150, "diastolic": 95 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("hypertension_report.txt"));
    assert_eq!(body_string(response).await, "CANNED REPORT");
}

#[tokio::test]
async fn test_list_drug_classes() {
    let app = app_with(Arc::new(MockAssessmentService::new()));

    let response = app.oneshot(get("/api/v1/drug-classes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "ACE Inhibitors",
            "ARBs",
            "Calcium Channel Blockers",
            "Thiazide Diuretics",
            "Beta Blockers"
        ]
    );
}

#[tokio::test]
async fn test_get_drug_class_by_alias() {
    let app = app_with(Arc::new(MockAssessmentService::new()));

    let response = app.oneshot(get("/api/v1/drug-classes/ccb")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["key"], "calcium_channel_blocker");
}

#[tokio::test]
async fn test_unknown_drug_class_is_not_found() {
    let app = app_with(Arc::new(MockAssessmentService::new()));

    let response = app.oneshot(get("/api/v1/drug-classes/statins")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_lookup_failure_from_service_maps_to_not_found() {
    let app = app_with(Arc::new(MockAssessmentService::new().with_lookup_failure()));

    let response = app.oneshot(get("/api/v1/drug-classes/arb")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inverted_pressures_rejected() {
    let app = app_with(Arc::new(MockAssessmentService::new()));

    let response = app
        .oneshot(json_post("/api/v1/assessments", json!({ "systolic": 90, "diastolic": 95 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body["message"],
        "Systolic pressure must be greater than diastolic pressure"
    );
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let mock = Arc::new(MockAssessmentService::new());
    let app = app_with(mock.clone());

    let request = axum::http::Request::builder()
        .uri("/api/v1/assessments/report")
        .method("POST")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ \"age\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert_eq!(mock.assess_calls(), 0);
}
