//! Dashboard input parameters.
//!
//! The dashboard's only input channel is its URL query string, normally a
//! deep link produced by the recommendation endpoint.

use thiserror::Error;
use url::Url;

use crate::domain::recommendation::{
    DeepLinkBuilder, RawAnswers, PARAM_CLIENT_VOLUME, PARAM_ORG_TYPE, PARAM_PACKAGE,
    PARAM_SEATS, PARAM_SERVICE_MODEL, PARAM_SPECIALIZATION, PARAM_TEAM_SIZE,
};

/// Placeholder shown for optional answers the user skipped.
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Invalid dashboard URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Decoded dashboard query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardParams {
    pub package: String,
    pub seats: String,
    pub org_type: String,
    pub team_size: String,
    pub client_volume: String,
    pub service_model: String,
    pub specialization: String,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            package: String::new(),
            seats: String::new(),
            org_type: String::new(),
            team_size: String::new(),
            client_volume: String::new(),
            service_model: NOT_SPECIFIED.to_string(),
            specialization: NOT_SPECIFIED.to_string(),
        }
    }
}

impl DashboardParams {
    /// Parses a full dashboard URL.
    pub fn from_url(link: &str) -> Result<Self, ParamsError> {
        let url = Url::parse(link)?;
        Ok(Self::from_query(url.query().unwrap_or("")))
    }

    /// Parses a pasted link: a full URL, a link without a scheme such as
    /// `localhost:8501/?package=..`, or a bare query string.
    pub fn from_link(link: &str) -> Result<Self, ParamsError> {
        let link = link.trim();
        if link.contains("://") {
            return Self::from_url(link);
        }

        let query = link.split_once('?').map_or(link, |(_, query)| query);
        let query = query.split_once('#').map_or(query, |(query, _)| query);
        Ok(Self::from_query(query))
    }

    /// Parses a raw query string (without the leading `?`).
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    /// Empty optional answers read as "Not specified".
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let mut seen: Vec<String> = Vec::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if seen.iter().any(|k| k == key.as_ref()) {
                continue;
            }
            seen.push(key.to_string());

            let value = value.into_owned();
            match key.as_ref() {
                PARAM_PACKAGE => params.package = value,
                PARAM_SEATS => params.seats = value,
                PARAM_ORG_TYPE => params.org_type = value,
                PARAM_TEAM_SIZE => params.team_size = value,
                PARAM_CLIENT_VOLUME => params.client_volume = value,
                PARAM_SERVICE_MODEL if !value.is_empty() => params.service_model = value,
                PARAM_SPECIALIZATION if !value.is_empty() => params.specialization = value,
                _ => {}
            }
        }

        params
    }

    /// True when the link names a package to display.
    pub fn has_recommendation(&self) -> bool {
        !self.package.is_empty()
    }

    pub fn service_model_specified(&self) -> bool {
        self.service_model != NOT_SPECIFIED
    }

    pub fn specialization_specified(&self) -> bool {
        self.specialization != NOT_SPECIFIED
    }

    /// The answers to resubmit to the recommendation API.
    pub fn to_answers(&self) -> RawAnswers {
        let mut answers = RawAnswers::new(&self.org_type, &self.team_size, &self.client_volume);
        if self.service_model_specified() {
            answers.service_model = Some(self.service_model.clone());
        }
        if self.specialization_specified() {
            answers.specialization = Some(self.specialization.clone());
        }
        answers
    }

    /// Same parameters with a different package selected.
    pub fn with_package(&self, package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..self.clone()
        }
    }

    /// Encodes these parameters as a dashboard link.
    pub fn to_link(&self, links: &DeepLinkBuilder) -> String {
        links.link_from_parts(&[
            (PARAM_PACKAGE, self.package.as_str()),
            (PARAM_SEATS, self.seats.as_str()),
            (PARAM_ORG_TYPE, self.org_type.as_str()),
            (PARAM_TEAM_SIZE, self.team_size.as_str()),
            (PARAM_CLIENT_VOLUME, self.client_volume.as_str()),
            (PARAM_SERVICE_MODEL, self.service_model.as_str()),
            (PARAM_SPECIALIZATION, self.specialization.as_str()),
        ])
    }
}
