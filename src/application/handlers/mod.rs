//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod recommendation;
pub mod report;
