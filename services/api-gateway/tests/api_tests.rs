//! Gateway Integration Tests
//!
//! Drive the router in-process with `oneshot` requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use motolens_api_gateway::create_app;
use motolens_utils::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_app(&AppConfig::default()).unwrap()
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "motolens-api-gateway");
}

#[tokio::test]
async fn test_validate_known_vin() {
    let (status, body) = post_json(
        app(),
        "/api/v1/vin/validate",
        json!({ "vin": " 1hgcm82633a004352 " }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["checksum_valid"], true);
    assert_eq!(body["normalized_vin"], "1HGCM82633A004352");
    assert_eq!(body["sections"]["wmi"], "1HG");
    assert_eq!(body["manufacturer"]["manufacturer"], "Honda");
}

#[tokio::test]
async fn test_validate_rejected_vin_is_reported_in_body() {
    let (status, body) = post_json(app(), "/api/v1/vin/validate", json!({ "vin": "WBA123" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["error"]["kind"], "wrong_length");
    assert_eq!(body["error"]["actual"], 6);
    assert_eq!(body["message"], "VIN must be exactly 17 characters (got 6)");
    assert!(body["sections"].is_null());
    // partial input still resolves the manufacturer
    assert_eq!(body["manufacturer"]["manufacturer"], "BMW");
}

#[tokio::test]
async fn test_validate_oversized_vin_is_bad_request() {
    let (status, body) = post_json(
        app(),
        "/api/v1/vin/validate",
        json!({ "vin": "W".repeat(100) }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_vin_manufacturer_lookup() {
    let (status, body) = get(app(), "/api/v1/vin/WBADT63452CK12345/manufacturer").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["wmi"], "WBA");
    assert_eq!(body["is_match"], true);
    assert_eq!(body["manufacturer"], "BMW");
}

#[tokio::test]
async fn test_extract_gs1_barcode() {
    let (status, body) = post_json(
        app(),
        "/api/v1/barcode/extract",
        json!({ "raw": "(01)04012345678901(11)240315(10)L42(240)90915-YZZD1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["part_number"], "90915-YZZD1");
    assert_eq!(body["matched_rule"], "gs1_application_identifier");
    assert_eq!(body["confidence"], "high");
    assert_eq!(body["metadata"]["lot"], "L42");
    assert_eq!(body["production_date"], "2024-03-15");
}

#[tokio::test]
async fn test_extract_delimited_barcode() {
    let (status, body) = post_json(
        app(),
        "/api/v1/barcode/extract",
        json!({ "raw": "PN:11427566327|MFR:BMW|LOT:2024" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["part_number"], "11427566327");
    assert_eq!(body["confidence"], "low");
    assert_eq!(body["metadata"]["manufacturer"], "BMW");
}

#[tokio::test]
async fn test_extract_empty_barcode_is_bad_request() {
    let (status, body) = post_json(app(), "/api/v1/barcode/extract", json!({ "raw": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_metrics_count_requests() {
    let app = app();

    post_json(app.clone(), "/api/v1/barcode/extract", json!({ "raw": "04E115561H" })).await;
    post_json(app.clone(), "/api/v1/vin/validate", json!({ "vin": "1HGCM82633A004352" })).await;

    let (status, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"motolens_barcode_extractions_total{rule="plain_alphanumeric"} 1"#));
    assert!(body.contains(r#"motolens_vin_validations_total{outcome="VALID"} 1"#));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "scan-123")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "scan-123");
}
