//! BuildReportHandler - Query handler that produces the dashboard report.

use std::sync::Arc;

use crate::domain::recommendation::{DeepLinkBuilder, Package};
use crate::domain::report::{AlternativeView, DashboardParams, ReportDetails, ReportView};
use crate::ports::{RecommendationSource, RemoteRecommendation};

/// Query to build a report for a set of dashboard parameters.
#[derive(Debug, Clone)]
pub struct BuildReportQuery {
    pub params: DashboardParams,
}

/// Handler for dashboard report queries.
///
/// Makes at most one call to the recommendation source. Failures become a
/// `ReportView::Failed` rather than an error; there is no retry.
pub struct BuildReportHandler {
    source: Arc<dyn RecommendationSource>,
    links: DeepLinkBuilder,
}

impl BuildReportHandler {
    pub fn new(source: Arc<dyn RecommendationSource>, links: DeepLinkBuilder) -> Self {
        Self { source, links }
    }

    pub async fn handle(&self, query: BuildReportQuery) -> ReportView {
        let params = query.params;
        if !params.has_recommendation() {
            return ReportView::MissingParameters;
        }

        match self.source.fetch(&params.to_answers()).await {
            Ok(remote) => {
                let details = self.details(&params, remote);
                ReportView::Ready { params, details }
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Recommendation service call failed");
                ReportView::Failed {
                    params,
                    message: e.to_string(),
                }
            }
        }
    }

    fn details(&self, params: &DashboardParams, remote: RemoteRecommendation) -> ReportDetails {
        let recommended = remote.recommendation.package;
        let alternatives = remote
            .alternatives
            .into_iter()
            .filter(|alt| Package::from_display_name(&alt.name) != Some(recommended))
            .map(|alt| AlternativeView {
                view_url: params.with_package(alt.name.clone()).to_link(&self.links),
                name: alt.name,
                best_for: alt.best_for,
                price: alt.price,
            })
            .collect();

        ReportDetails {
            package: remote.recommendation.package,
            seats: remote.recommendation.seats,
            monthly_price: remote.recommendation.monthly_price,
            features: remote.recommendation.features,
            explanation: remote.recommendation.explanation,
            alternatives,
            next_steps: remote.next_steps,
        }
    }
}
