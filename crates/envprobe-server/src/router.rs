//! Axum router wiring.
//!
//! Exposes a single `GET /` route.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handler};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::exposed_env))
        .with_state(state)
}
