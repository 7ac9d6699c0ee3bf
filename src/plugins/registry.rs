//! Registry of tools offered to the host

use super::traits::{LlmTool, ToolDefinition};
use anyhow::Result;
use std::sync::Arc;

/// Registry of all loaded tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn LlmTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn LlmTool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn LlmTool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Names of all registered tools
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Definitions of all registered tools
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Call a tool by name
    pub async fn call(&self, name: &str, args: serde_json::Value) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("unknown tool: {}", name))?;
        tool.call(args).await
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
