//! HTTP route handlers.
//!
//! Probe, status, and data responses are marked `no-store` so that nothing
//! between the orchestrator and the pod serves a stale answer. The root route
//! varies on `Accept` since it negotiates between HTML and JSON.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod data;
pub mod health;
pub mod home;
pub mod status;

use axum::http::header::{HeaderValue, CACHE_CONTROL, VARY};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::{request_id_layer, require_api_key};
use crate::state::AppState;

fn no_store() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
    )
}

/// Fallback for unknown paths and unsupported methods.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    // Liveness and readiness probes
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .layer(no_store());

    // Root - HTML or JSON depending on Accept
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(VARY, HeaderValue::from_static("accept")),
    );

    let status_routes = Router::new()
        .route("/api/status", get(status::status))
        .layer(no_store());

    // Secured data - API key checked before the handler runs
    let data_routes = Router::new()
        .route("/api/data", get(data::data))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(no_store());

    Router::new()
        .merge(probe_routes)
        .merge(home_routes)
        .merge(status_routes)
        .merge(data_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
