//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use guichet_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
///
/// Probes the database so the answer reflects real liveness.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .db
        .health_check()
        .await
        .map_err(|_| AppError::service_unavailable("Database unreachable"))?;

    Ok(Json(json!({ "status": "ok" })))
}
