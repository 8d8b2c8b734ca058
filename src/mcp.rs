//! MCP server connection descriptors.
//!
//! The loader produces descriptors only; connecting to a server is the
//! host's concern. Servers come from exactly one source per load: the
//! manifest's inline map when it is non-empty, otherwise the root-level
//! config file. The two are never merged.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::manifest::{McpServersDecl, PluginManifest};

/// A single server connection: `url` for remote servers, `command` (plus
/// `args`/`env`) for locally launched ones. Fields this crate does not
/// model are kept in `extra` so host-specific connection options survive a
/// round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct McpFile {
    #[serde(rename = "mcpServers")]
    mcp_servers: HashMap<String, McpServerConfig>,
}

pub(crate) async fn load_mcp_servers(
    manifest: &PluginManifest,
    fallback: &Path,
) -> Result<Option<HashMap<String, McpServerConfig>>, PluginError> {
    if let Some(McpServersDecl::Inline(servers)) = &manifest.mcp_servers
        && !servers.is_empty()
    {
        return Ok(Some(servers.clone()));
    }

    if !fallback.exists() {
        return Ok(None);
    }

    let content = tokio::fs::read_to_string(fallback).await?;
    let file: McpFile = serde_json::from_str(&content).map_err(|e| PluginError::InvalidMcp {
        path: fallback.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some(file.mcp_servers))
}
