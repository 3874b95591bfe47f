//! Dashboard deep links.
//!
//! A deep link carries the recommendation and the original answers as query
//! parameters so the dashboard can render without re-asking the survey.
//! Every value is percent-encoded; spaces become `%20`.

use super::answers::RawAnswers;
use super::package::Placement;

/// Query parameter names, in link order.
pub const PARAM_PACKAGE: &str = "package";
pub const PARAM_SEATS: &str = "seats";
pub const PARAM_ORG_TYPE: &str = "org_type";
pub const PARAM_TEAM_SIZE: &str = "team_size";
pub const PARAM_CLIENT_VOLUME: &str = "client_volume";
pub const PARAM_SERVICE_MODEL: &str = "service_model";
pub const PARAM_SPECIALIZATION: &str = "specialization";

/// Builds dashboard links against a fixed base URL.
#[derive(Debug, Clone)]
pub struct DeepLinkBuilder {
    base_url: String,
}

impl DeepLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Link for a placement computed from `answers`.
    pub fn link_for(&self, placement: &Placement, answers: &RawAnswers) -> String {
        let seats = placement.seats.to_string();
        self.link_from_parts(&[
            (PARAM_PACKAGE, placement.package.display_name()),
            (PARAM_SEATS, seats.as_str()),
            (PARAM_ORG_TYPE, answers.org_type.as_str()),
            (PARAM_TEAM_SIZE, answers.team_size.as_str()),
            (PARAM_CLIENT_VOLUME, answers.client_volume.as_str()),
            (
                PARAM_SERVICE_MODEL,
                answers.service_model.as_deref().unwrap_or(""),
            ),
            (
                PARAM_SPECIALIZATION,
                answers.specialization.as_deref().unwrap_or(""),
            ),
        ])
    }

    /// Link from explicit (name, value) pairs, kept in the given order.
    pub fn link_from_parts(&self, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, query)
    }
}
