//! Cache occupancy metrics.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::server::AppState;

/// GET /api/metrics — current memoization cache occupancy.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<Value> {
    let entries = state.cache.lock().expect("fib cache lock poisoned").len();
    Json(json!({
        "cache": { "entries": entries }
    }))
}
