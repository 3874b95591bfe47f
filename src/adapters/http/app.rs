//! Top-level router assembly.
//!
//! Mounts the recommendation routes and applies the cross-cutting layers:
//! request tracing, a per-request timeout, and CORS.

use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::recommendation::{
    recommendation_router, RecommendationAppState, RecommendationEnvelope,
};

const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Build the complete application router.
pub fn build_app(state: RecommendationAppState, server: &ServerConfig) -> Router {
    let router = recommendation_router().with_state(state);

    with_timeout(router, server.request_timeout())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Applies the request timeout. A request that runs out of time still
/// answers with the error envelope, keeping the 408 status.
fn with_timeout(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(timeout_envelope))
}

async fn timeout_envelope(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request exceeded the configured timeout");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(RecommendationEnvelope::error(TIMEOUT_MESSAGE)),
    )
        .into_response()
}

/// CORS policy: any origin unless an explicit list is configured.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
