//! Cogni - Subscription package recommender
//!
//! Maps a short intake survey to one of five subscription packages with a
//! seat count and monthly price, and renders the result for the dashboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
