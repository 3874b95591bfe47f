//! HTTP DTOs (Data Transfer Objects) for recommendation endpoints.
//!
//! These types define the JSON request/response structure of the API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::recommendation::{
    Alternative, AssembledResponse, Package, RawAnswers, Recommendation,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Survey submission for `POST /getRecommendation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub org_type: String,
    pub team_size: String,
    pub client_volume: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Accepted for compatibility; not used by the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Accepted for compatibility; not used by the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
}

impl RecommendationRequest {
    pub fn to_answers(&self) -> RawAnswers {
        RawAnswers {
            org_type: self.org_type.clone(),
            team_size: self.team_size.clone(),
            client_volume: self.client_volume.clone(),
            service_model: self.service_model.clone(),
            specialization: self.specialization.clone(),
        }
    }
}

impl From<&RawAnswers> for RecommendationRequest {
    fn from(answers: &RawAnswers) -> Self {
        Self {
            org_type: answers.org_type.clone(),
            team_size: answers.team_size.clone(),
            client_volume: answers.client_volume.clone(),
            service_model: answers.service_model.clone(),
            specialization: answers.specialization.clone(),
            timeline: None,
            features: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// The recommended package as sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationBody {
    pub package: Package,
    pub seats: u32,
    pub monthly_price: u32,
    pub features: Vec<String>,
    pub explanation: String,
    /// Dashboard deep link. The field name is kept for existing clients.
    pub streamlit_url: String,
}

impl From<Recommendation> for RecommendationBody {
    fn from(rec: Recommendation) -> Self {
        Self {
            package: rec.package,
            seats: rec.seats,
            monthly_price: rec.monthly_price,
            features: rec.features,
            explanation: rec.explanation,
            streamlit_url: rec.dashboard_url,
        }
    }
}

/// Uniform response envelope. Callers must inspect `status`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecommendationEnvelope {
    Success {
        recommendation: RecommendationBody,
        alternatives: Vec<Alternative>,
        next_steps: Vec<String>,
    },
    Error {
        message: String,
    },
}

impl RecommendationEnvelope {
    pub fn error(message: impl Into<String>) -> Self {
        RecommendationEnvelope::Error {
            message: message.into(),
        }
    }
}

impl From<AssembledResponse> for RecommendationEnvelope {
    fn from(response: AssembledResponse) -> Self {
        RecommendationEnvelope::Success {
            recommendation: response.recommendation.into(),
            alternatives: response.alternatives,
            next_steps: response.next_steps,
        }
    }
}
