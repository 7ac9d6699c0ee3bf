//! The `searxng_search` tool: web search for an LLM through a SearXNG instance

use super::traits::{LlmTool, Plugin, PluginInfo};
use crate::config::Settings;
use crate::results::ResultFormatter;
use crate::search::SearchClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::info;

/// Tool name registered with the host
pub const TOOL_NAME: &str = "searxng_search";

const TOOL_DESCRIPTION: &str =
    "Web search tool for retrieving up-to-date information. Returns titles, snippets and links.";

/// Plugin wrapping a [`SearchClient`] and a [`ResultFormatter`]
pub struct SearxngPlugin {
    client: SearchClient,
    formatter: ResultFormatter,
}

impl SearxngPlugin {
    pub fn new(settings: Settings) -> Result<Self> {
        let formatter = ResultFormatter::from_settings(&settings);
        let client = SearchClient::new(settings)?;
        Ok(Self { client, formatter })
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// Search and render the results as text
    pub async fn search_text(
        &self,
        query: &str,
        categories: Option<&str>,
        language: Option<&str>,
    ) -> String {
        let response = self.client.search(query, categories, language).await;
        self.formatter.format(&response)
    }
}

#[async_trait]
impl Plugin for SearxngPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: "searxng".to_string(),
            name: "SearXNG Search".to_string(),
            description: "Web search for LLMs backed by a SearXNG instance".to_string(),
            version: crate::VERSION.to_string(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }

    async fn initialize(&self) -> Result<()> {
        self.client.startup().await
    }

    async fn terminate(&self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl LlmTool for SearxngPlugin {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Keywords or question to search for"
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, args: serde_json::Value) -> Result<String> {
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .context("missing string argument 'query'")?;

        info!("LLM invoked search tool, query: {}", query);
        Ok(self.search_text(query, None, None).await)
    }
}
