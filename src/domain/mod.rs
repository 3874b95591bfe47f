//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `recommendation` - Answer normalization, package rules, pricing and explanation
//! - `report` - Dashboard parameters and the rendered report

pub mod recommendation;
pub mod report;
