use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{fortune_handler, health_handler, metrics_handler};
use crate::state::AppState;

// Single origin with credentials; wildcards are not allowed alongside credentials
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: Arc<AppState>, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/hafez/getFal", post(fortune_handler))
        .route("/metrics", get(metrics_handler))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
