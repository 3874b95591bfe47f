//! Recommendation domain module.
//!
//! Maps survey answers to a subscription package and seat count, then prices
//! and explains the result.
//!
//! # Module Structure
//!
//! - `answers` - Raw and normalized survey answers
//! - `normalizer` - Chatbot phrase tables and normalization
//! - `rules` - Ordered decision table and the `Recommender`
//! - `package` - Package enum and placements
//! - `catalog` - Price, feature, alternative and next-step tables
//! - `deep_link` - Dashboard link construction
//! - `assembler` - Response assembly and explanation text
//! - `errors` - Recommendation errors

mod answers;
mod assembler;
mod catalog;
mod deep_link;
mod errors;
mod normalizer;
mod package;
mod rules;

pub use answers::{ClientVolume, NormalizedAnswers, OrganizationType, RawAnswers, TeamSize};
pub use assembler::{explain, AssembledResponse, Recommendation, ResponseAssembler};
pub use catalog::{
    Alternative, Catalog, CatalogError, FeatureTable, PriceTable, FALLBACK_SEAT_PRICE,
    MIN_FEATURES,
};
pub use deep_link::{
    DeepLinkBuilder, PARAM_CLIENT_VOLUME, PARAM_ORG_TYPE, PARAM_PACKAGE, PARAM_SEATS,
    PARAM_SERVICE_MODEL, PARAM_SPECIALIZATION, PARAM_TEAM_SIZE,
};
pub use errors::{ErrorCode, RecommendationError};
pub use normalizer::{Normalizer, PhraseTables};
pub use package::{Package, Placement};
pub use rules::{Recommender, Rule, RuleCascade, RuleMatch, Subject, CATCH_ALL_RULE};
