use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use microwave_control::{create_router, spawn_appliance, AppState, Appliance};

fn app() -> Router {
    let (commands, snapshots) = spawn_appliance(Appliance::new(), 8);
    create_router(Arc::new(AppState::new(20554, "127.0.0.1".to_string(), commands, snapshots)))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn start_with_entered_time() {
    let app = app();

    let (status, body) = call(&app, Method::PUT, "/input/time", Some(json!({ "text": "10:00" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appliance"]["entered_time_text"], "10:00");
    assert_eq!(body["status"], "inactive");

    let (status, body) = call(&app, Method::POST, "/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["appliance"]["remaining_seconds"], 600);
    assert_eq!(body["appliance"]["power_level"], 5);
}

#[tokio::test]
async fn invalid_time_surfaces_alert_until_acknowledged() {
    let app = app();

    call(&app, Method::PUT, "/input/time", Some(json!({ "text": "70:00" }))).await;
    let (status, body) = call(&app, Method::POST, "/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alert");
    assert_eq!(body["appliance"]["alert"], "invalid_time");
    assert_eq!(body["message"], "Entered time is in the wrong format. Please try again");

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["appliance"]["alert"], "invalid_time");
    assert_eq!(body["last_action"], "start");

    let (_, body) = call(&app, Method::POST, "/alert/acknowledge", None).await;
    assert_eq!(body["appliance"]["alert"], Value::Null);
    assert_eq!(body["status"], "inactive");
}

#[tokio::test]
async fn defrost_by_weight_rejects_fractional_weight() {
    let app = app();

    call(&app, Method::PUT, "/input/weight", Some(json!({ "text": "50.2" }))).await;
    let (_, body) = call(&app, Method::POST, "/defrost/weight", None).await;
    assert_eq!(body["appliance"]["alert"], "invalid_weight");
    assert_eq!(body["appliance"]["power_level"], 5);
    assert_eq!(body["appliance"]["is_counting_down"], false);
}

#[tokio::test]
async fn defrost_by_time_derives_power() {
    let app = app();

    call(&app, Method::PUT, "/input/time", Some(json!({ "text": "10:00" }))).await;
    let (_, body) = call(&app, Method::POST, "/defrost/time", None).await;
    assert_eq!(body["status"], "active");
    assert_eq!(body["appliance"]["power_level"], 7);
    assert_eq!(body["appliance"]["remaining_seconds"], 600);
}

#[tokio::test]
async fn presets_by_name() {
    let app = app();

    let (status, body) = call(&app, Method::POST, "/preset/popcorn", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appliance"]["power_level"], 7);
    assert_eq!(body["appliance"]["remaining_seconds"], 300);

    let (status, _) = call(&app, Method::POST, "/preset/pizza", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn power_level_must_be_in_range() {
    let app = app();

    let (status, body) = call(&app, Method::PUT, "/power", Some(json!({ "level": 8 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appliance"]["power_level"], 8);

    let (status, _) = call(&app, Method::PUT, "/power", Some(json!({ "level": 11 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = call(&app, Method::PUT, "/power", Some(json!({ "level": 0 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn stop_and_clear_always_succeed() {
    let app = app();

    let (status, body) = call(&app, Method::POST, "/stop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "inactive");

    call(&app, Method::PUT, "/input/time", Some(json!({ "text": "01:00" }))).await;
    call(&app, Method::POST, "/start", None).await;
    let (status, body) = call(&app, Method::POST, "/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appliance"]["shown_time"], "00:00");
    assert_eq!(body["appliance"]["is_counting_down"], false);
    assert_eq!(body["appliance"]["timer_active"], false);
}
