//! Recommendation source port.
//!
//! The dashboard report fetches recommendation details through this port.
//! The production adapter calls the HTTP API; tests substitute fixed data.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::recommendation::{Alternative, Package, RawAnswers};

/// Source of full recommendation details for a set of answers.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Requests a recommendation for `answers`.
    ///
    /// Returns `Api` when the service answered with an error envelope.
    async fn fetch(&self, answers: &RawAnswers) -> Result<RemoteRecommendation, SourceError>;
}

/// Recommendation details as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRecommendation {
    pub recommendation: RemoteRecommendationDetails,
    pub alternatives: Vec<Alternative>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRecommendationDetails {
    pub package: Package,
    pub seats: u32,
    pub monthly_price: u32,
    pub features: Vec<String>,
    pub explanation: String,
    pub streamlit_url: String,
}

/// Failures reaching or understanding the recommendation service.
///
/// The display strings are what the dashboard shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("API Error: {0}")]
    Api(String),

    #[error("Failed to connect to recommendation service")]
    UnexpectedStatus(u16),

    #[error("An error occurred: {0}")]
    Unavailable(String),

    #[error("An error occurred: invalid response from recommendation service: {0}")]
    InvalidResponse(String),
}
