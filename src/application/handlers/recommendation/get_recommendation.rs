//! GetRecommendationHandler - Query handler for package recommendations.

use std::sync::Arc;

use crate::domain::recommendation::{
    AssembledResponse, RawAnswers, RecommendationError, Recommender, ResponseAssembler,
};

/// Query carrying one survey submission.
#[derive(Debug, Clone)]
pub struct GetRecommendationQuery {
    pub answers: RawAnswers,
}

/// Result of a recommendation query.
#[derive(Debug, Clone)]
pub struct GetRecommendationResult {
    /// Name of the rule that chose the package.
    pub matched_rule: &'static str,
    pub response: AssembledResponse,
}

/// Handler for recommendation queries.
///
/// Pure over its inputs; the recommender and assembler are shared read-only.
pub struct GetRecommendationHandler {
    recommender: Arc<Recommender>,
    assembler: Arc<ResponseAssembler>,
}

impl GetRecommendationHandler {
    pub fn new(recommender: Arc<Recommender>, assembler: Arc<ResponseAssembler>) -> Self {
        Self {
            recommender,
            assembler,
        }
    }

    pub fn handle(
        &self,
        query: GetRecommendationQuery,
    ) -> Result<GetRecommendationResult, RecommendationError> {
        let matched = self.recommender.recommend(&query.answers)?;

        tracing::info!(
            rule = matched.rule,
            package = %matched.placement.package,
            seats = matched.placement.seats,
            "Recommendation selected"
        );

        let response = self
            .assembler
            .assemble(&matched.placement, &query.answers)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to assemble recommendation");
                e
            })?;

        Ok(GetRecommendationResult {
            matched_rule: matched.rule,
            response,
        })
    }
}
