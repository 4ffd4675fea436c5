//! Axum router wiring.
//!
//! Exposes a single `GET /test` route.

use axum::{routing::get, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(transport::http::delay))
        .with_state(state)
}
