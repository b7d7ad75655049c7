//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Store stats (item count)

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{handlers::ApiError, state::AppState};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Store stats.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let items = state.items.count_items().await?;
    Ok(Json(json!({ "status": "ok", "items": items })))
}
