//! Recommendation-specific error types.
//!
//! # Envelope Mapping
//!
//! | Error | Envelope status | HTTP Status |
//! |-------|-----------------|-------------|
//! | InvalidMapping | error | 200 |
//! | FeatureTableUnderrun | error | 200 |

use std::fmt;

use super::Package;

/// Error codes for recommendation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidMapping,
    FeatureTableUnderrun,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidMapping => "INVALID_MAPPING",
            ErrorCode::FeatureTableUnderrun => "FEATURE_TABLE_UNDERRUN",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while producing a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    /// A required answer (organization type or team size) normalized to nothing.
    InvalidMapping,

    /// The feature table holds fewer than two entries for a package.
    FeatureTableUnderrun { package: Package, available: usize },
}

impl RecommendationError {
    pub fn invalid_mapping() -> Self {
        RecommendationError::InvalidMapping
    }

    pub fn feature_table_underrun(package: Package, available: usize) -> Self {
        RecommendationError::FeatureTableUnderrun { package, available }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RecommendationError::InvalidMapping => ErrorCode::InvalidMapping,
            RecommendationError::FeatureTableUnderrun { .. } => ErrorCode::FeatureTableUnderrun,
        }
    }

    /// Returns the message surfaced to API callers.
    pub fn message(&self) -> String {
        match self {
            RecommendationError::InvalidMapping => {
                "Invalid mapping: org_type or team_size not recognized.".to_string()
            }
            RecommendationError::FeatureTableUnderrun { package, available } => format!(
                "Package '{}' lists {} feature(s); at least 2 are required to explain it",
                package, available
            ),
        }
    }

    /// Returns true if the caller supplied the bad data.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RecommendationError::InvalidMapping)
    }
}

impl fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RecommendationError {}
