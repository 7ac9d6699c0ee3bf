//! Host integration for the search tool
//!
//! A host loads plugins, calls their lifecycle hooks, and exposes their
//! tools to the model:
//! - initialize: open the HTTP session
//! - call: run a tool with JSON arguments
//! - terminate: release the session

mod registry;
mod searxng;
mod traits;

pub use registry::ToolRegistry;
pub use searxng::{SearxngPlugin, TOOL_NAME};
pub use traits::*;
