//! Operational probes: liveness and readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

/// Readiness with a storage round-trip; 503 while the database is unreachable.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<StatusBody>, (StatusCode, Json<StatusBody>)> {
    match state.repo.ping().await {
        Ok(()) => Ok(Json(StatusBody { status: "ok" })),
        Err(_) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusBody {
                status: "degraded",
            }),
        )),
    }
}
