//! Plugin and tool traits exposed to a hosting application

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Plugin information for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Plugin version
    pub version: String,
    /// Project home
    pub repository: String,
}

/// Lifecycle hooks driven by the host
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get plugin info
    fn info(&self) -> PluginInfo;

    /// Called once when the host loads the plugin
    async fn initialize(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called when the host unloads the plugin. Must be safe to call repeatedly.
    async fn terminate(&self) {}
}

/// A function an LLM can call by name
#[async_trait]
pub trait LlmTool: Send + Sync {
    /// Name the model uses to call the tool
    fn name(&self) -> &str;

    /// Description shown to the model
    fn description(&self) -> &str;

    /// JSON schema of the arguments
    fn parameters(&self) -> serde_json::Value;

    /// Run the tool and return text for the model
    async fn call(&self, args: serde_json::Value) -> anyhow::Result<String>;

    /// Definition handed to the host
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Serializable description of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
