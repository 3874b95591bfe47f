//! HTTP implementation of the `RecommendationSource` port.
//!
//! Calls `POST {api_url}/getRecommendation` and decodes the response
//! envelope. One request per call; no retry, no caching.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::recommendation::RecommendationRequest;
use crate::domain::recommendation::RawAnswers;
use crate::ports::{RecommendationSource, RemoteRecommendation, SourceError};

/// Configuration for the recommendation API client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the recommendation API, without trailing path.
    pub api_url: String,
    pub timeout: Duration,
}

/// Response envelope as decoded by the client.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ApiEnvelope {
    Success(RemoteRecommendation),
    Error { message: String },
}

/// Recommendation source backed by the HTTP API.
pub struct HttpRecommendationClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpRecommendationClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the HTTP client cannot be built.
    pub fn new(config: HttpClientConfig) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/getRecommendation", config.api_url.trim_end_matches('/')),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationSource for HttpRecommendationClient {
    async fn fetch(&self, answers: &RawAnswers) -> Result<RemoteRecommendation, SourceError> {
        tracing::debug!("Requesting recommendation from {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&RecommendationRequest::from(answers))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach recommendation service: {}", e);
                SourceError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!("Recommendation service returned {}", status);
            return Err(SourceError::UnexpectedStatus(status.as_u16()));
        }

        let envelope: ApiEnvelope = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recommendation response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        match envelope {
            ApiEnvelope::Success(remote) => Ok(remote),
            ApiEnvelope::Error { message } => Err(SourceError::Api(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::Package;
    use serde_json::json;

    fn config(api_url: &str) -> HttpClientConfig {
        HttpClientConfig {
            api_url: api_url.to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = HttpRecommendationClient::new(config("http://localhost:8000/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/getRecommendation");
    }

    #[test]
    fn success_envelope_decodes() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "status": "success",
            "recommendation": {
                "package": "Fresh Start",
                "seats": 4,
                "monthly_price": 196,
                "features": ["Provider dashboard", "Email support"],
                "explanation": "Fits.",
                "streamlit_url": "http://localhost:8501/"
            },
            "alternatives": [
                {"name": "Practice Plus", "best_for": "Growing practices (6-15 providers)", "price": "$49/seat"}
            ],
            "next_steps": ["Review the detailed report"]
        }))
        .unwrap();

        let ApiEnvelope::Success(remote) = envelope else {
            panic!("expected success");
        };
        assert_eq!(remote.recommendation.package, Package::FreshStart);
        assert_eq!(remote.recommendation.seats, 4);
        assert_eq!(remote.alternatives[0].name, "Practice Plus");
    }

    #[test]
    fn unknown_package_name_is_rejected() {
        let result = serde_json::from_value::<ApiEnvelope>(json!({
            "status": "success",
            "recommendation": {
                "package": "Gold Tier",
                "seats": 4,
                "monthly_price": 196,
                "features": [],
                "explanation": "",
                "streamlit_url": ""
            },
            "alternatives": [],
            "next_steps": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn error_envelope_decodes() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"status": "error", "message": "Invalid mapping"}))
                .unwrap();
        assert!(matches!(envelope, ApiEnvelope::Error { message } if message == "Invalid mapping"));
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client =
            HttpRecommendationClient::new(config(&format!("http://127.0.0.1:{}", port))).unwrap();
        let err = client
            .fetch(&RawAnswers::new("Other", "1", "Low"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
        assert!(err.to_string().starts_with("An error occurred: "));
    }
}
