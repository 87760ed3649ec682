mod helpers;

use helpers::{UNREACHABLE_GEMINI, test_app};
use serde_json::Value;

#[tokio::test]
async fn test_live() {
    let server = test_app(UNREACHABLE_GEMINI);

    let response = server.get("/health/live").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_model() {
    let server = test_app(UNREACHABLE_GEMINI);

    let body: Value = server.get("/health/ready").await.json();

    assert_eq!(body["status"], "ready");
    assert!(body["model"].is_string());
}

#[tokio::test]
async fn test_dietary_filters_in_display_order() {
    let server = test_app(UNREACHABLE_GEMINI);

    let response = server.get("/dietary-filters").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|filter| filter["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["vegetarian", "vegan", "gluten-free", "keto", "dairy-free"]
    );
    assert_eq!(body["data"][2]["label"], "Gluten-Free");
}
