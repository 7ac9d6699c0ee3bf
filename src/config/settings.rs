//! Settings structure for the SearXNG search tool

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public instance queried when nothing else is configured
pub const DEFAULT_SEARXNG_URL: &str = "https://search.sapti.me";

/// Tool settings, mirroring the keys a host passes to the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the SearXNG instance
    pub searxng_url: String,
    /// Total request timeout in seconds
    pub timeout: f64,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Default search categories
    pub categories: String,
    /// Default search language
    pub language: String,
    /// Maximum number of results rendered
    pub max_results: usize,
    /// Maximum characters of content rendered per result
    pub max_content_length: usize,
    /// Idle connections kept per host
    pub pool_max_idle: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            searxng_url: DEFAULT_SEARXNG_URL.to_string(),
            timeout: 15.0,
            user_agent: crate::network::default_user_agent(),
            categories: "general".to_string(),
            language: "zh-CN".to_string(),
            max_results: 8,
            max_content_length: 200,
            pool_max_idle: 10,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEARXNG_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Numeric values that fail to parse leave the current value in place.
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SEARXNG_URL") {
            self.searxng_url = val;
        }
        if let Some(val) = lookup("SEARXNG_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.timeout = timeout;
            }
        }
        if let Some(val) = lookup("SEARXNG_USER_AGENT") {
            self.user_agent = val;
        }
        if let Some(val) = lookup("SEARXNG_CATEGORIES") {
            self.categories = val;
        }
        if let Some(val) = lookup("SEARXNG_LANGUAGE") {
            self.language = val;
        }
        if let Some(val) = lookup("SEARXNG_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.max_results = max;
            }
        }
        if let Some(val) = lookup("SEARXNG_MAX_CONTENT_LENGTH") {
            if let Ok(max) = val.parse() {
                self.max_content_length = max;
            }
        }
    }

    /// Check that the settings can drive a search
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.searxng_url)
            .with_context(|| format!("invalid searxng_url: {}", self.searxng_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("searxng_url must use http or https, got {}", url.scheme());
        }
        if self.timeout_duration()?.is_zero() {
            anyhow::bail!("timeout must be a positive number of seconds");
        }
        if self.max_results == 0 {
            anyhow::bail!("max_results must be at least 1");
        }
        if self.max_content_length < 3 {
            anyhow::bail!("max_content_length must be at least 3");
        }
        Ok(())
    }

    /// Request timeout as a duration. Fails on negative, NaN or out of range values.
    pub fn timeout_duration(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.timeout)
            .with_context(|| format!("invalid timeout: {} seconds", self.timeout))
    }

    /// Instance URL, always ending in a path separator
    pub fn base_url(&self) -> Result<Url> {
        let mut base = self.searxng_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).with_context(|| format!("invalid searxng_url: {}", self.searxng_url))
    }

    /// Search endpoint of the instance
    pub fn search_url(&self) -> Result<Url> {
        Ok(self.base_url()?.join("search")?)
    }
}
