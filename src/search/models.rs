//! Search request and response data models

use super::error::SearchError;
use crate::config::Settings;
use serde::{Deserialize, Serialize};

/// Parameters of a single query against the instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search query string
    pub query: String,
    /// Comma separated SearXNG categories
    pub categories: String,
    /// Language code
    pub language: String,
}

impl SearchRequest {
    /// Create a request using the configured categories and language
    pub fn new(query: impl Into<String>, settings: &Settings) -> Self {
        Self {
            query: query.into(),
            categories: settings.categories.clone(),
            language: settings.language.clone(),
        }
    }

    /// Override the categories when one is given
    pub fn with_categories(mut self, categories: Option<&str>) -> Self {
        if let Some(categories) = categories.filter(|c| !c.trim().is_empty()) {
            self.categories = categories.to_string();
        }
        self
    }

    /// Override the language when one is given
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        if let Some(language) = language.filter(|l| !l.trim().is_empty()) {
            self.language = language.to_string();
        }
        self
    }

    /// Check if the query is blank
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Query string parameters sent to `/search`
    pub fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("q", self.query.as_str()),
            ("format", "json"),
            ("categories", self.categories.as_str()),
            ("language", self.language.as_str()),
        ]
    }
}

/// A single result as returned by the instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: url.into(),
            content: Some(content.into()),
        }
    }
}

/// Outcome of one query: either results or an error message.
///
/// When both are present the error takes precedence for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    /// Results in the order the instance returned them
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn with_results(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            results,
            error: None,
        }
    }

    /// Response carrying no results and the error's message
    pub fn failed(query: impl Into<String>, error: &SearchError) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
