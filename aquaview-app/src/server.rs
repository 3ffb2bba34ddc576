//! Stub HTTP surface for the dashboard.
//!
//! The endpoints are placeholders for a real telemetry source and actuator
//! channel: GET /sensors serves the latest simulated snapshot, POST /controls
//! echoes the submitted toggle without any device I/O. A background interval
//! task is the only writer of the shared engine; handlers read the current
//! snapshot and only the controls handler takes the write lock.

use std::sync::Arc;

use anyhow::{Context, Result};
use aquaview_core::telemetry::engine::TelemetryEngine;
use aquaview_schemas::{
    api::{ControlAck, Envelope},
    control::ControlCommand,
    detection::{sample_detections, Detection},
    reading::Reading,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tower_http::trace::TraceLayer;

/// Shared application state available to all handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<TelemetryEngine>>,
}

impl AppState {
    pub fn new(engine: TelemetryEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /sensors — the current reading snapshot inside a status envelope.
async fn get_sensors(State(state): State<AppState>) -> Json<Envelope<Reading>> {
    let engine = state.engine.read().await;
    Json(Envelope::ok(*engine.current_reading()))
}

/// POST /controls — flips the in-memory toggle and echoes the payload back.
/// No feedback into the simulation.
async fn post_controls(
    State(state): State<AppState>,
    Json(cmd): Json<ControlCommand>,
) -> Json<ControlAck> {
    let mut engine = state.engine.write().await;
    engine.set_control(cmd.control, cmd.on);
    let message = format!(
        "{} turned {}",
        cmd.control.label(),
        if cmd.on { "on" } else { "off" }
    );
    tracing::info!(control = %cmd.control, on = cmd.on, "control toggled");
    Json(ControlAck::ok(cmd, message))
}

/// GET /detections — the hardcoded detection array.
async fn get_detections() -> Json<Envelope<Vec<Detection>>> {
    Json(Envelope::ok(sample_detections()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sensors", get(get_sensors))
        .route("/controls", post(post_controls))
        .route("/detections", get(get_detections))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Spawns the periodic update loop that owns snapshot replacement.
///
/// A tick missed while the process is suspended is skipped, never replayed.
pub fn spawn_tick_loop(state: AppState, tick_interval_ms: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(tick_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let mut engine = state.engine.write().await;
            if let Err(e) = engine.tick() {
                tracing::error!(error = %e, "telemetry tick failed");
            }
        }
    })
}

pub async fn serve(listen_addr: &str, tick_interval_ms: u64, engine: TelemetryEngine) -> Result<()> {
    let state = AppState::new(engine);
    spawn_tick_loop(state.clone(), tick_interval_ms);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    tracing::info!("Starting server on {listen_addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
