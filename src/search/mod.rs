//! Search module
//!
//! Issues queries against a SearXNG instance's JSON API and normalizes every
//! outcome into a [`SearchResponse`].

mod client;
mod error;
mod models;

pub use client::SearchClient;
pub use error::SearchError;
pub use models::*;
