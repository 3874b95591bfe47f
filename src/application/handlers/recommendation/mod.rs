//! Recommendation handlers.
//!
//! ## Queries
//! - Get a package recommendation for a survey submission

mod get_recommendation;

pub use get_recommendation::{
    GetRecommendationHandler, GetRecommendationQuery, GetRecommendationResult,
};
