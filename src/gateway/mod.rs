pub mod handlers;
pub mod latency;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::clock::LocalClock;
use crate::config::{AppConfig, StoreBackend};
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::store::{InventoryStore, MemoryStore, RedisStore};
use state::AppState;

/// Build the store backend selected in config.
pub fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn InventoryStore>> {
    let store: Arc<dyn InventoryStore> = match config.store.backend {
        StoreBackend::Redis => {
            let url = config.redis.connection_url();
            let timeout = Duration::from_millis(config.redis.timeout_ms);
            Arc::new(
                RedisStore::new(&url, timeout)
                    .with_context(|| format!("Invalid Redis address: {}", url))?,
            )
        }
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}

pub fn build_random(config: &AppConfig) -> Arc<dyn RandomSource> {
    match config.random_seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    }
}

/// Wire services to the store, probe it, and seed inventory.
///
/// An unreachable store is only a warning: checks fail open until it
/// comes back.
pub async fn build_state(
    config: &AppConfig,
    store: Arc<dyn InventoryStore>,
) -> Arc<AppState> {
    let state = AppState::new(config, store, build_random(config), Arc::new(LocalClock));

    let store_name = state.store.name();
    match state.store.ping().await {
        Ok(()) => tracing::info!(store = store_name, "Connected to store"),
        Err(e) => tracing::warn!(store = store_name, error = %e, "Could not connect to store"),
    }

    state.inventory.initialize().await;
    Arc::new(state)
}

/// Routes plus the logging and latency middleware.
///
/// Logging is the outer layer, so reported durations include the
/// injected latency.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/validate", post(handlers::validate_order))
        .route("/calculate-price", post(handlers::calculate_price))
        .route("/check-inventory", post(handlers::check_inventory))
        .layer(from_fn_with_state(state.clone(), latency::latency_middleware))
        .layer(from_fn(latency::logging_middleware))
        .with_state(state)
        // Stateless docs, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port already in use?)", addr))?;

    tracing::info!("Middleware service listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
