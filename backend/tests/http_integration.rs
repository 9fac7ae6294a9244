#![cfg(feature = "http-server")]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use dfw_flights::config::DashboardConfig;
use dfw_flights::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::new(DashboardConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn new_session(app: &Router) -> Value {
    let (status, body) = send(app, Method::POST, "/v1/sessions").await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn test_health_counts_sessions() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sessions"], 0);

    new_session(&app).await;
    let (_, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(body["sessions"], 1);
}

#[tokio::test]
async fn test_config_endpoint() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/v1/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seed"], 42);
    assert_eq!(body["window_days"], 30);
    assert_eq!(body["hub_airline"], "American Airlines");
    assert_eq!(body["hub_range"], serde_json::json!([150, 200]));
}

#[tokio::test]
async fn test_create_and_fetch_session() {
    let app = app();
    let created = new_session(&app).await;

    assert_eq!(created["record_count"], 90);
    assert_eq!(created["filters"]["airlines"].as_array().unwrap().len(), 3);
    assert_eq!(created["filters"]["max_date"], created["today"]);

    let id = created["session_id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/v1/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["session_id"], created["session_id"]);

    let (status, records) = send(&app, Method::GET, &format!("/v1/sessions/{}/records", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records["total"], 90);
    assert_eq!(records["records"].as_array().unwrap().len(), 90);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/v1/sessions/nope/dashboard").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_session() {
    let app = app();
    let created = new_session(&app).await;
    let uri = format!("/v1/sessions/{}", created["session_id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_default_dashboard() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();

    let (status, view) = send(&app, Method::GET, &format!("/v1/sessions/{}/dashboard", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["records"].as_array().unwrap().len(), 90);
    assert_eq!(view["chart"]["series"].as_array().unwrap().len(), 3);
    assert_eq!(view["chart"]["y_label"], "Number of Flights");
    assert_eq!(view["meta"]["title"], "DFW Airport Flight Frequency Analysis");
    assert_eq!(view["statistics"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_dashboard_single_airline_single_day() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();
    let min_date = created["filters"]["min_date"].as_str().unwrap();

    let uri = format!(
        "/v1/sessions/{}/dashboard?airlines=American%20Airlines,Delta&start={}&end={}",
        id, min_date, min_date
    );
    let (status, view) = send(&app, Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "ready");
    assert_eq!(view["records"].as_array().unwrap().len(), 2);
    assert_eq!(view["totals"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_dashboard_empty_airlines_warns() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();

    let (status, view) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/dashboard?airlines=", id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "no_data");
    assert_eq!(view["message"], "No data available for the selected filters.");
}

#[tokio::test]
async fn test_dashboard_single_endpoint_is_incomplete() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();
    let today = created["today"].as_str().unwrap();

    let (status, view) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/dashboard?start={}", id, today),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "incomplete_selection");
    assert_eq!(view["message"], "Please select both start and end dates.");
    assert!(view["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_rejects_unknown_airline() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/dashboard?airlines=United", id),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_dashboard_rejects_date_outside_window() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/dashboard?start=1999-01-01&end=1999-01-02", id),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("1999-01-01"));
}

#[tokio::test]
async fn test_dashboard_malformed_date_is_json_error() {
    let app = app();
    let created = new_session(&app).await;
    let id = created["session_id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/dashboard?start=2026-13-01&end=2026-10-16", id),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(!body["message"].as_str().unwrap().is_empty());
}
