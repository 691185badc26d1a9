// Handler tests for the Pricing API
// Exercises the full router: decoding, validation, order taking switch and quoting

use super::*;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

fn create_test_app() -> TestServer {
    TestServer::new(create_router(AppState::new(true))).unwrap()
}

fn simple_order() -> serde_json::Value {
    json!({
        "prices": [1.0],
        "quantities": [1],
        "country": "FR",
        "reduction": "STANDARD"
    })
}

fn order_with(field: &str, value: serde_json::Value) -> serde_json::Value {
    let mut order = simple_order();
    order[field] = value;
    order
}

// ============================================================================
// POST /order
// ============================================================================

#[tokio::test]
async fn test_simple_order_is_quoted() {
    let server = create_test_app();

    let response = server.post("/order").json(&simple_order()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let quote: Quote = response.json();
    assert_eq!(quote.total, 1.2);
}

#[tokio::test]
async fn test_zero_order_is_quoted_zero() {
    let server = create_test_app();
    let payload = json!({
        "prices": [0.0],
        "quantities": [0],
        "country": "FR",
        "reduction": "STANDARD"
    });

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "total": 0.0 }));
}

#[tokio::test]
async fn test_france_standard_reduction_tier() {
    let server = create_test_app();
    let payload = json!({
        "prices": [5000.00],
        "quantities": [1],
        "country": "FR",
        "reduction": "STANDARD"
    });

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let quote: Quote = response.json();
    assert!((quote.total - 5700.0).abs() < 1e-9, "got {}", quote.total);
}

#[tokio::test]
async fn test_half_price_and_pay_the_price() {
    let server = create_test_app();

    let mut half = order_with("prices", json!([5000.00]));
    half["reduction"] = json!("HALF PRICE");
    let quote: Quote = server.post("/order").json(&half).await.json();
    assert!((quote.total - 3000.0).abs() < 1e-9, "got {}", quote.total);

    let mut full = order_with("prices", json!([5000.00]));
    full["reduction"] = json!("PAY THE PRICE");
    let quote: Quote = server.post("/order").json(&full).await.json();
    assert!((quote.total - 6000.0).abs() < 1e-9, "got {}", quote.total);
}

#[tokio::test]
async fn test_united_kingdom_threshold_tax() {
    let server = create_test_app();
    let payload = json!({
        "prices": [1000.0, 200.0, 4.0],
        "quantities": [5, 5, 5],
        "country": "UK",
        "reduction": "STANDARD"
    });

    let quote: Quote = server.post("/order").json(&payload).await.json();

    assert!((quote.total - 6774.306).abs() < 1e-9, "got {}", quote.total);
}

#[tokio::test]
async fn test_empty_price_list_is_bad_request() {
    let server = create_test_app();
    let payload = json!({
        "prices": [],
        "quantities": [],
        "country": "FR",
        "reduction": "STANDARD"
    });

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
    assert!(body["details"]["prices"].is_array());
}

#[tokio::test]
async fn test_mismatched_lengths_are_bad_request() {
    let server = create_test_app();
    let payload = order_with("quantities", json!([1, 2]));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_fields_are_bad_request() {
    let server = create_test_app();

    for field in ["prices", "quantities", "country", "reduction"] {
        let payload = order_with(field, serde_json::Value::Null);
        let response = server.post("/order").json(&payload).await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "null {} should be rejected",
            field
        );
    }
}

#[tokio::test]
async fn test_country_too_long_is_bad_request() {
    let server = create_test_app();
    let payload = order_with("country", json!("FRA"));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_quantity_is_bad_request() {
    let server = create_test_app();
    let payload = order_with("quantities", json!([-1]));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "MALFORMED_BODY");
}

#[tokio::test]
async fn test_null_order_is_bad_request() {
    let server = create_test_app();

    let response = server.post("/order").json(&serde_json::Value::Null).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_json_body_is_bad_request() {
    let server = create_test_app();

    let response = server.post("/order").text("not an order").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_country_is_not_found() {
    let server = create_test_app();
    let payload = order_with("country", json!("XX"));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "NOT_ACCEPTED");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_invalid_order_with_unknown_country_is_bad_request() {
    let server = create_test_app();
    let mut payload = order_with("country", json!("XX"));
    payload["prices"] = json!([1.0, 2.0]);

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["details"]["__all__"].is_array());
}

#[tokio::test]
async fn test_unknown_reduction_is_not_found() {
    let server = create_test_app();
    let payload = order_with("reduction", json!("XXXXXXX"));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_reduction_is_bad_request() {
    let server = create_test_app();
    let payload = order_with("reduction", json!(""));

    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Order taking switch
// ============================================================================

#[tokio::test]
async fn test_accepting_orders_can_be_turned_off_and_on() {
    let server = create_test_app();

    let response = server.post("/disable").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());

    let response = server.post("/order").json(&simple_order()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.post("/enable").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.post("/order").json(&simple_order()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Quote>().total, 1.2);
}

#[tokio::test]
async fn test_malformed_order_is_rejected_even_when_disabled() {
    let server = create_test_app();
    server.post("/disable").await;

    let payload = order_with("prices", json!([]));
    let response = server.post("/order").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_service_can_start_disabled() {
    let server = TestServer::new(create_router(AppState::new(false))).unwrap();

    let response = server.post("/order").json(&simple_order()).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    server.post("/enable").await;
    let response = server.post("/order").json(&simple_order()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

// ============================================================================
// Feedback and liveness
// ============================================================================

#[tokio::test]
async fn test_feedback_is_acknowledged() {
    let server = create_test_app();

    let response = server
        .post("/feedback")
        .json(&json!({ "type": "WIN", "content": "Well done" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.post("/feedback").text("free-form message").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_feedback_accepts_non_utf8_payload() {
    let server = create_test_app();

    let response = server
        .post("/feedback")
        .bytes(vec![0xff, 0xfe, 0x00].into())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_ping_returns_pong() {
    let server = create_test_app();

    let response = server.get("/ping").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "pong");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = create_test_app();

    let response = server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/order"].is_object());
}
