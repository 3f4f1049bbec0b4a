//! Domain endpoints.
//!
//! - `/healthcheck` : static liveness body, no side effects
//! - `/contador`    : one increment per call, returns the new value

use axum::{extract::State, http::Uri, Json};
use contador_core::{
    protocol::{ContadorValue, HealthStatus},
    ContadorError,
};

use crate::{app_state::AppState, error::ApiError};

pub async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}

/// Not idempotent: every call advances the counter.
pub async fn contador(State(state): State<AppState>) -> Json<ContadorValue> {
    let value = state.counter().increment_and_get();
    tracing::debug!(contador = value, "counter incremented");
    Json(ContadorValue { contador: value })
}

pub async fn not_found(uri: Uri) -> ApiError {
    ContadorError::NotFound(uri.path().to_string()).into()
}
