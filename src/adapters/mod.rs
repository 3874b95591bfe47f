//! Adapters - Implementations of ports and inbound transports.
//!
//! - `http` - axum REST API
//! - `client` - reqwest client for the recommendation API

pub mod client;
pub mod http;
