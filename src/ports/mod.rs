//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecommendationSource` - Where the dashboard report gets its data

mod recommendation_source;

pub use recommendation_source::{
    RecommendationSource, RemoteRecommendation, RemoteRecommendationDetails, SourceError,
};
