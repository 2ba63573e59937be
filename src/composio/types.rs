//! Composio API type definitions
//!
//! These types mirror the Composio v3 request and response bodies.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-toolkit tool selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolSelection {
    /// Tool slugs to enable
    #[serde(default)]
    pub enable: Vec<String>,
}

/// Toolkit selection for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolkitSelection {
    /// Toolkit slugs to enable
    #[serde(default)]
    pub enable: Vec<String>,
}

/// Body of a session creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRequest {
    /// User the session acts for
    pub user_id: String,

    /// Toolkits reachable from the session
    pub toolkits: ToolkitSelection,

    /// Tools per toolkit, keyed by toolkit slug
    pub tools: BTreeMap<String, ToolSelection>,
}

impl SessionRequest {
    /// All tool slugs named by this request
    pub fn tool_slugs(&self) -> impl Iterator<Item = &str> {
        self.tools
            .values()
            .flat_map(|selection| selection.enable.iter().map(String::as_str))
    }
}

/// MCP endpoint exposed by a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMcp {
    /// Transport type, e.g. "http"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Endpoint URL
    pub url: String,
}

/// A provisioned session. Fields other than the ID are opaque to this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session ID
    pub session_id: String,

    /// MCP endpoint, if the provider returned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp: Option<SessionMcp>,

    /// Tool slugs exposed by the session
    #[serde(default)]
    pub tool_router_tools: Vec<String>,

    /// Everything else the provider sent back
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Toolkit reference on a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolkitRef {
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A remotely exposed tool, ready to hand to an agent framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolHandle {
    /// Tool slug, e.g. `GMAIL_FETCH_EMAILS`
    pub slug: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Tool description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Owning toolkit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolkit: Option<ToolkitRef>,

    /// Input schema (JSON Schema)
    #[serde(default)]
    pub input_parameters: Value,
}

impl fmt::Display for ToolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

/// Response of the tool listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ToolList {
    #[serde(default)]
    pub items: Vec<ToolHandle>,
}
