//! The Fibonacci compute endpoint.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::server::AppState;
use crate::error::FibError;
use crate::fib::fib;

/// Request body for `POST /api/fibonacci`.
#[derive(Debug, Deserialize)]
pub struct FibRequest {
    /// Index of the Fibonacci number to compute.
    pub nth: Option<i64>,
}

/// Successful response: the value plus cache diagnostics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibResponse {
    /// Decimal string of F(nth). A string because the value outgrows any
    /// JSON-safe number for moderate `nth`.
    pub result: String,
    /// Whether `nth` itself was already cached when the request arrived.
    pub cache_hit: bool,
    /// Cache entry count after the computation.
    pub cache_size: usize,
}

/// Handler for `POST /api/fibonacci`.
///
/// Validates `nth`, snapshots cache state, computes on a blocking worker
/// (big-integer arithmetic is CPU-bound and must not stall the async
/// executor), and reports the result with cache diagnostics. A panicking
/// worker is caught at the join and surfaced as a 500.
pub async fn compute_fibonacci(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FibRequest>, JsonRejection>,
) -> Result<Json<FibResponse>, FibError> {
    // Any unparsable or absent body counts as a missing parameter.
    let Json(request) = body.map_err(|_| FibError::MissingNth)?;
    let nth = request.nth.ok_or(FibError::MissingNth)?;
    if nth < 0 {
        return Err(FibError::NegativeNth);
    }
    let nth = nth as u64;

    let cache = Arc::clone(&state.cache);
    let response = tokio::task::spawn_blocking(move || {
        let mut cache = cache.lock().expect("fib cache lock poisoned");
        let size_before = cache.len();
        // Hit means this exact index was cached before the call; base
        // cases 0 and 1 never enter the cache and never count as hits.
        let cache_hit = size_before > 0 && cache.contains(nth);
        info!(entries = size_before, "Cache size before calculation");

        let value = fib(&mut cache, nth);

        let cache_size = cache.len();
        info!(entries = cache_size, "Cache size after calculation");
        FibResponse {
            result: value.to_string(),
            cache_hit,
            cache_size,
        }
    })
    .await
    .map_err(|e| FibError::Calculation(e.to_string()))?;

    Ok(Json(response))
}
