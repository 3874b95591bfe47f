//! Outbound HTTP clients.

mod http_recommendation_client;

pub use http_recommendation_client::{HttpClientConfig, HttpRecommendationClient};
