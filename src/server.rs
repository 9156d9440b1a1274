use axum::{middleware as axum_mw, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers;
use crate::middleware::timing;
use crate::seed::{self, SeedError};
use crate::AppState;

/// Picks the router for the process mode. Seed data is read only in
/// active mode; a gated process never touches the seed file.
pub fn build_router(config: &Config) -> Result<Router, SeedError> {
    if !config.debug {
        tracing::warn!("debug mode disabled, every request will be rejected with 503");
        return Ok(gated_router());
    }

    let store = seed::load(&config.seed_path)?;
    tracing::info!(records = store.len(), "debug mode enabled, serving aggregation endpoints");
    Ok(active_router(Arc::new(AppState { store })))
}

/// Active mode: aggregation endpoints over the seeded store.
pub fn active_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Aggregation ─────────────────────────────────────────
        .route("/results/average", get(handlers::results::average))
        .route(
            "/results/average/:start_time/:end_time",
            get(handlers::results::average_in_window),
        )
        .with_state(state)
        .fallback(handlers::not_found)
        .layer(axum_mw::from_fn(timing::timing_middleware))
        .layer(CorsLayer::permissive())
}

/// Gated mode: no routes, everything falls through to a 503. No CORS
/// layer either, since it would answer preflight requests itself.
pub fn gated_router() -> Router {
    Router::new()
        .fallback(handlers::service_disabled)
        .layer(axum_mw::from_fn(timing::timing_middleware))
}
