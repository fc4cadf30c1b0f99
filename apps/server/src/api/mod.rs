//! HTTP API surface.
//!
//! Everything lives under `/api/v1`. This is the presentation
//! collaborator contract: listing (with search and filter), per-asset
//! chart series, explicit refresh, and a liveness probe.

mod board;
mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", board::router().merge(health::router()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
