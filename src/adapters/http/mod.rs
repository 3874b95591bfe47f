//! HTTP adapters - REST API implementations.

pub mod app;
pub mod recommendation;

// Re-export key types for convenience
pub use app::{build_app, cors_layer};
pub use recommendation::recommendation_router;
pub use recommendation::RecommendationAppState;
