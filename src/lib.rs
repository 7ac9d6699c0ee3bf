//! SearXNG search tool: lets an LLM host search the web through a SearXNG
//! instance's JSON API and get back readable text.
//!
//! The flow is `SearchClient::search` -> `SearchResponse` ->
//! `ResultFormatter::format` -> text. Every failure is folded into the
//! response, so callers always get something displayable.

pub mod config;
pub mod network;
pub mod plugins;
pub mod results;
pub mod search;

pub use config::Settings;
pub use plugins::{LlmTool, Plugin, SearxngPlugin, ToolRegistry};
pub use results::{format_results, ResultFormatter};
pub use search::{SearchClient, SearchError, SearchRequest, SearchResponse, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
