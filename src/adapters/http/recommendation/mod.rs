//! HTTP adapter for recommendation endpoints.
//!
//! Exposes the recommendation pipeline via REST API:
//! - `GET /` - Liveness message
//! - `GET /health` - Health check
//! - `POST /getRecommendation` - Recommend a package for survey answers

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::RecommendationAppState;
pub use routes::recommendation_router;
