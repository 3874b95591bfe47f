//! Turns a placement into the full recommendation payload.

use std::sync::Arc;

use super::answers::RawAnswers;
use super::catalog::{Alternative, Catalog};
use super::deep_link::DeepLinkBuilder;
use super::errors::RecommendationError;
use super::package::{Package, Placement};

/// A priced, explained recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub package: Package,
    pub seats: u32,
    pub monthly_price: u32,
    pub features: Vec<String>,
    pub explanation: String,
    pub dashboard_url: String,
}

/// Recommendation plus the request-independent extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledResponse {
    pub recommendation: Recommendation,
    pub alternatives: Vec<Alternative>,
    pub next_steps: Vec<String>,
}

/// Prices, explains and links a placement.
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    catalog: Arc<Catalog>,
    links: DeepLinkBuilder,
}

impl ResponseAssembler {
    pub fn new(catalog: Arc<Catalog>, links: DeepLinkBuilder) -> Self {
        Self { catalog, links }
    }

    /// # Errors
    ///
    /// `FeatureTableUnderrun` if the package has fewer than two features.
    pub fn assemble(
        &self,
        placement: &Placement,
        answers: &RawAnswers,
    ) -> Result<AssembledResponse, RecommendationError> {
        let features = self.catalog.features_for(placement.package).to_vec();
        let explanation = explain(placement.package, &features, answers)?;

        Ok(AssembledResponse {
            recommendation: Recommendation {
                package: placement.package,
                seats: placement.seats,
                monthly_price: self.catalog.price_for(placement),
                features,
                explanation,
                dashboard_url: self.links.link_for(placement, answers),
            },
            alternatives: self.catalog.alternatives().to_vec(),
            next_steps: self.catalog.next_steps().to_vec(),
        })
    }
}

/// Builds the explanation from the original answers and the first two features.
pub fn explain(
    package: Package,
    features: &[String],
    answers: &RawAnswers,
) -> Result<String, RecommendationError> {
    let (first, second) = match features {
        [first, second, ..] => (first, second),
        _ => {
            return Err(RecommendationError::feature_table_underrun(
                package,
                features.len(),
            ))
        }
    };

    Ok(format!(
        "Based on your organization type ({}), team size ({}), and client volume ({}), \
         the {} package is recommended. This package is ideal because it provides {} and {}.",
        answers.org_type,
        answers.team_size,
        answers.client_volume,
        package,
        first.to_lowercase(),
        second.to_lowercase()
    ))
}
