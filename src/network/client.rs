//! HTTP client construction for requests to the SearXNG instance

use super::user_agent::{accept_json, accept_language};
use crate::config::Settings;
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

/// Build a pooled client carrying the configured timeout and fixed headers.
///
/// The returned client is reference counted internally; clones share one
/// connection pool that is safe to use from concurrent tasks.
pub fn build_client(settings: &Settings) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(accept_json()));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&accept_language(&settings.language))?,
    );

    let client = Client::builder()
        .timeout(settings.timeout_duration()?)
        .pool_max_idle_per_host(settings.pool_max_idle)
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}
