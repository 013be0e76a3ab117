//! Health endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/health — liveness probe.
pub async fn get_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
