use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::state::AppState;

/// Health check endpoint
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.users.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "health check failed");
        ApiError::service_unavailable("Database unavailable")
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
