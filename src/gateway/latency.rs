//! Synthetic latency and request logging for observability demos
//!
//! Delays are `tokio::time::sleep`, so a waiting request never holds up
//! any other one.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::logging::HTTP_TARGET;

use super::state::AppState;

/// Millisecond delay ranges (inclusive)
pub const MIDDLEWARE_DELAY_MS: (i64, i64) = (10, 99);
pub const VALIDATE_DELAY_MS: (i64, i64) = (20, 99);
pub const PRICE_DELAY_MS: (i64, i64) = (30, 99);
pub const INVENTORY_DELAY_MS: (i64, i64) = (20, 79);

/// Sleep for a random duration within `range` when latency is enabled.
pub async fn simulate(state: &AppState, range: (i64, i64)) {
    if !state.latency.enabled {
        return;
    }
    let ms = state.random.between(range.0, range.1).max(0) as u64;
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub async fn latency_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    simulate(&state, MIDDLEWARE_DELAY_MS).await;
    next.run(request).await
}

pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    tracing::info!(target: HTTP_TARGET, "Started {} {}", method, path);
    let response = next.run(request).await;
    tracing::info!(
        target: HTTP_TARGET,
        status = response.status().as_u16(),
        "Completed {} {} in {:?}",
        method,
        path,
        start.elapsed()
    );

    response
}
