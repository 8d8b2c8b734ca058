use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::mcp::McpServerConfig;
use crate::paths::{PLUGIN_CONFIG_DIR, PLUGIN_MANIFEST_FILE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The manifest's `mcpServers` field.
///
/// Either a path to a server-config file (subject to the containment check)
/// or an inline server map used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum McpServersDecl {
    Path(String),
    Inline(HashMap<String, McpServerConfig>),
}

/// Top-level plugin declaration, read from `.claude-plugin/plugin.json`.
///
/// The path-valued fields (`commands`, `agents`, `skills`, `hooks`) override
/// component locations relative to the plugin root. An override adds a
/// second scan location next to the default, it does not replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PluginAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
    #[serde(default, rename = "mcpServers", skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<McpServersDecl>,
}

impl PluginManifest {
    /// A minimal manifest carrying only the required `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: None,
            author: None,
            commands: None,
            agents: None,
            skills: None,
            hooks: None,
            mcp_servers: None,
        }
    }

    pub(crate) async fn load(root: &Path) -> Result<Self, PluginError> {
        let manifest_path = root.join(PLUGIN_CONFIG_DIR).join(PLUGIN_MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(PluginError::ManifestNotFound {
                path: manifest_path,
            });
        }
        let content = tokio::fs::read_to_string(&manifest_path).await?;
        serde_json::from_str(&content).map_err(|e| PluginError::InvalidManifest {
            path: manifest_path,
            reason: e.to_string(),
        })
    }
}
