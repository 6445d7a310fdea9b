//! The responder: filter the environment and answer with a JSON object.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use envprobe_core::expose::expose;

use crate::{app_state::AppState, error::HttpError};

pub async fn exposed_env(State(state): State<AppState>) -> Result<Response, HttpError> {
    let out = expose(state.rule(), state.env());
    tracing::debug!(mode = %state.cfg().probe.mode, exposed = out.len(), "serving exposed env");
    let body = out.to_json()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
