//! HTTP networking module
//!
//! Builds the HTTP session used to talk to the SearXNG instance.

mod client;
mod user_agent;

pub use client::build_client;
pub use user_agent::{accept_json, accept_language, default_user_agent};
