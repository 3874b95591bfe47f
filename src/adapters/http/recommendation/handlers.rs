//! HTTP handlers for recommendation endpoints.
//!
//! These handlers connect Axum routes to the application layer query handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{GetRecommendationHandler, GetRecommendationQuery};
use crate::domain::recommendation::{
    Catalog, CatalogError, DeepLinkBuilder, Recommender, ResponseAssembler,
};

use super::dto::{HealthResponse, MessageResponse, RecommendationEnvelope, RecommendationRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned per request; everything inside is immutable and Arc-wrapped.
#[derive(Clone)]
pub struct RecommendationAppState {
    pub recommender: Arc<Recommender>,
    pub assembler: Arc<ResponseAssembler>,
}

impl RecommendationAppState {
    pub fn new(recommender: Arc<Recommender>, assembler: Arc<ResponseAssembler>) -> Self {
        Self {
            recommender,
            assembler,
        }
    }

    /// State wired with the standard tables and the given dashboard link base.
    pub fn standard(dashboard_base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let catalog = Arc::new(Catalog::standard()?);
        Ok(Self::new(
            Arc::new(Recommender::standard()),
            Arc::new(ResponseAssembler::new(
                catalog,
                DeepLinkBuilder::new(dashboard_base_url),
            )),
        ))
    }

    /// Create the handler on demand from the shared state.
    pub fn get_recommendation_handler(&self) -> GetRecommendationHandler {
        GetRecommendationHandler::new(self.recommender.clone(), self.assembler.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Cogni API is running".to_string(),
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// `POST /getRecommendation`
///
/// Logical failures answer 200 with `status: "error"`. A body that cannot be
/// decoded keeps the extractor's status code but uses the same envelope.
pub async fn get_recommendation(
    State(state): State<RecommendationAppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected recommendation request body");
            return (
                rejection.status(),
                Json(RecommendationEnvelope::error(rejection.body_text())),
            )
                .into_response();
        }
    };

    if request.timeline.is_some() || request.features.is_some() {
        tracing::debug!(
            timeline = ?request.timeline,
            features = ?request.features,
            "Ignoring informational request fields"
        );
    }

    let query = GetRecommendationQuery {
        answers: request.to_answers(),
    };

    let envelope = match state.get_recommendation_handler().handle(query) {
        Ok(result) => RecommendationEnvelope::from(result.response),
        Err(e) => {
            if e.is_client_error() {
                tracing::info!(code = %e.code(), "Recommendation request not mappable");
            } else {
                tracing::error!(code = %e.code(), error = %e, "Recommendation failed");
            }
            RecommendationEnvelope::error(e.message())
        }
    };

    (StatusCode::OK, Json(envelope)).into_response()
}
