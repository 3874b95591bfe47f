//! Dashboard report domain module.
//!
//! The dashboard reads its state from deep-link query parameters, fetches the
//! full recommendation, and shows it next to the alternatives.

mod params;
mod view;

pub use params::{DashboardParams, ParamsError, NOT_SPECIFIED};
pub use view::{AlternativeView, ReportDetails, ReportView, MISSING_PARAMETERS_MESSAGE};
