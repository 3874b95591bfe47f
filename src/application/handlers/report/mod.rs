//! Dashboard report handlers.
//!
//! ## Queries
//! - Build the report shown for a set of dashboard parameters

mod build_report;

pub use build_report::{BuildReportHandler, BuildReportQuery};
