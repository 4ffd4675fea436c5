//! HTTP handler for the delay endpoint.
//!
//! `GET /test` takes no input. Malformed requests, unknown paths, and wrong
//! methods fall through to axum's default rejections.

use axum::{extract::State, Json};

use lockstep_core::protocol::TimingResult;

use crate::app_state::AppState;

pub async fn delay(State(app): State<AppState>) -> Json<TimingResult> {
    let result = app.run_exclusive().await;
    tracing::debug!(elapsed = result.elapsed, "delay completed");
    Json(result)
}
