//! Router configuration for the HTTP API.
//!
//! Sets up routes, CORS and request tracing.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/sunrise-sunset", get(handlers::sunrise_sunset))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
