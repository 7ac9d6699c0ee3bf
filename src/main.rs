//! Command line host for the SearXNG search tool
//!
//! Loads settings, registers the search plugin, runs one query and prints the
//! formatted results.

use anyhow::Result;
use clap::Parser;
use searxng_tool::{
    config,
    plugins::{Plugin, SearxngPlugin, ToolRegistry, TOOL_NAME},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search the web through a SearXNG instance
#[derive(Debug, Parser)]
#[command(name = "searxng-tool", version, about)]
struct Args {
    /// Query to search for
    #[arg(required_unless_present = "list_tools")]
    query: Vec<String>,

    /// Path to settings file
    #[arg(short, long, env = config::SETTINGS_PATH_ENV)]
    config: Option<PathBuf>,

    /// SearXNG categories, overriding the configured default
    #[arg(long)]
    categories: Option<String>,

    /// Search language, overriding the configured default
    #[arg(short, long)]
    language: Option<String>,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Print the tool definitions as JSON and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting searxng-tool v{}", searxng_tool::VERSION);

    let mut settings = config::load(args.config.as_deref())?;
    if let Some(max) = args.max_results {
        settings.max_results = max;
        settings.validate()?;
    }

    let plugin = Arc::new(SearxngPlugin::new(settings)?);
    let mut registry = ToolRegistry::new();
    registry.register(plugin.clone());

    if args.list_tools {
        println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        return Ok(());
    }

    plugin.initialize().await?;

    let query = args.query.join(" ");
    let output = run_search(
        &plugin,
        &registry,
        &query,
        args.categories.as_deref(),
        args.language.as_deref(),
    )
    .await?;

    println!("{}", output);
    Ok(())
}

/// Run one search and release the session whether or not it succeeded
async fn run_search(
    plugin: &SearxngPlugin,
    registry: &ToolRegistry,
    query: &str,
    categories: Option<&str>,
    language: Option<&str>,
) -> Result<String> {
    let output = if categories.is_some() || language.is_some() {
        Ok(plugin.search_text(query, categories, language).await)
    } else {
        registry
            .call(TOOL_NAME, serde_json::json!({ "query": query }))
            .await
    };

    plugin.terminate().await;
    output
}
