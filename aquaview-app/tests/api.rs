//! Integration tests for the stub dashboard endpoints.
//!
//! Each request is driven through the router with `tower::ServiceExt`; no
//! listener is bound.

use aquaview_app::server::{router, AppState};
use aquaview_core::telemetry::builder::TelemetryBuilder;
use aquaview_schemas::metric::Metric;
use aquaview_schemas::range::MetricRange;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

fn test_state() -> AppState {
    let engine = TelemetryBuilder::new()
        .with_ranges(vec![
            MetricRange {
                metric: Metric::WaterTemp,
                min: 20.0,
                max: 26.0,
            },
            MetricRange {
                metric: Metric::Ph,
                min: 6.0,
                max: 7.5,
            },
        ])
        .with_seed(1)
        .build()
        .expect("test engine should build");
    AppState::new(engine)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn sensors_returns_snapshot_in_envelope() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/sensors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
    assert!(json["data"]["waterTemp"].is_number());
    assert!(json["data"]["dissolvedO2"].is_number());
    assert!(json["data"]["lightIntensity"].is_number());
}

#[tokio::test]
async fn controls_echoes_the_submitted_payload() {
    let state = test_state();
    let app = router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/controls")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"control":"pump","on":true}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["control"], "pump");
    assert_eq!(json["data"]["on"], true);
    assert_eq!(json["message"], "Water Pump turned on");
    assert!(json["timestamp"].is_string());

    // The toggle landed in session memory.
    let engine = state.engine.read().await;
    assert!(engine
        .controls()
        .is_on(aquaview_schemas::control::Control::Pump));
}

#[tokio::test]
async fn controls_rejects_unknown_actuator() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/controls")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"control":"heater","on":true}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn detections_are_the_fixed_array() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/detections")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    let detections = json["data"].as_array().expect("data should be an array");
    assert_eq!(detections.len(), 4);
    assert!(detections[0]["confidence"].is_number());
}

#[tokio::test]
async fn health_reports_version() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
