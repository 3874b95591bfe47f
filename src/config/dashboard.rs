//! Dashboard configuration
//!
//! Where deep links point, and how the report reaches the API.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::error::ValidationError;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Base URL that deep links are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL of the recommendation API used by the report
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout for report calls to the API, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidDashboardUrl);
        }
        if !is_http_url(&self.api_url) {
            return Err(ValidationError::InvalidApiUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8501/".to_string()
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
