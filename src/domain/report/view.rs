//! Rendered dashboard report.

use std::fmt::Write;

use super::params::DashboardParams;
use crate::domain::recommendation::Package;

const TITLE: &str = "Cogni Mental Health Package Recommendation";

/// Message shown when the dashboard is opened without a recommendation.
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "No recommendation parameters found. Please complete the chatbot assessment first.";

/// An alternative package with a link that switches the report to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeView {
    pub name: String,
    pub best_for: String,
    pub price: String,
    pub view_url: String,
}

/// Everything shown for a successful recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDetails {
    pub package: Package,
    pub seats: u32,
    pub monthly_price: u32,
    pub features: Vec<String>,
    pub explanation: String,
    pub alternatives: Vec<AlternativeView>,
    pub next_steps: Vec<String>,
}

/// What the dashboard displays for one set of query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    /// No package in the link; the user has not finished the survey.
    MissingParameters,

    /// The service could not produce details.
    Failed {
        params: DashboardParams,
        message: String,
    },

    Ready {
        params: DashboardParams,
        details: ReportDetails,
    },
}

impl ReportView {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReportView::Ready { .. })
    }

    /// Renders the report as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", "=".repeat(TITLE.chars().count()))?;
        writeln!(out)?;

        match self {
            ReportView::MissingParameters => {
                writeln!(out, "{}", MISSING_PARAMETERS_MESSAGE)?;
            }
            ReportView::Failed { params, message } => {
                write_header(out, params)?;
                writeln!(out, "{}", message)?;
            }
            ReportView::Ready { params, details } => {
                write_header(out, params)?;
                write_details(out, details)?;
            }
        }

        Ok(())
    }
}

fn write_header(out: &mut String, params: &DashboardParams) -> std::fmt::Result {
    writeln!(out, "Recommended Package: {}", params.package)?;
    writeln!(out, "Recommended seats: {}", params.seats)?;
    writeln!(out)?;
    writeln!(out, "Your Assessment Summary")?;
    writeln!(out, "  Organization Type: {}", params.org_type)?;
    writeln!(out, "  Team Size: {}", params.team_size)?;
    writeln!(out, "  Client Volume: {}", params.client_volume)?;
    if params.service_model_specified() {
        writeln!(out, "  Service Model: {}", params.service_model)?;
    }
    if params.specialization_specified() {
        writeln!(out, "  Specialization: {}", params.specialization)?;
    }
    writeln!(out)
}

fn write_details(out: &mut String, details: &ReportDetails) -> std::fmt::Result {
    writeln!(out, "Package Details")?;
    writeln!(out, "  Key Features")?;
    for feature in &details.features {
        writeln!(out, "    ✓ {}", feature)?;
    }
    writeln!(out, "  Pricing")?;
    writeln!(out, "    Monthly Cost: ${}", details.monthly_price)?;
    writeln!(
        out,
        "    For {} seats | Volume discounts available",
        details.seats
    )?;
    writeln!(out, "  Why This Package?")?;
    writeln!(out, "    {}", details.explanation)?;
    writeln!(out)?;

    if !details.alternatives.is_empty() {
        writeln!(out, "Compare Alternatives")?;
        for alt in &details.alternatives {
            writeln!(out, "  {}: {}", alt.name, alt.best_for)?;
            writeln!(out, "    Price: {}", alt.price)?;
            writeln!(out, "    View: {}", alt.view_url)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Next Steps")?;
    for (i, step) in details.next_steps.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, step)?;
    }
    Ok(())
}
