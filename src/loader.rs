//! Plugin assembly.
//!
//! One load is a linear pipeline: parse the manifest, validate every
//! declared path override eagerly, run the component loaders, assemble.
//! Any failure aborts the whole call; a partial `Plugin` is never returned.
//! Nothing persists across calls.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agents::{self, Agent};
use crate::commands::{self, Command};
use crate::error::PluginError;
use crate::hooks::{self, HooksConfig};
use crate::manifest::PluginManifest;
use crate::mcp::{self, McpServerConfig};
use crate::paths::PluginLayout;
use crate::skills::{self, Skill};

/// A fully loaded plugin bundle. Owned by the caller; the loader keeps no
/// reference to it after returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    pub manifest: PluginManifest,
    pub agents: Vec<Agent>,
    pub commands: Vec<Command>,
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<HooksConfig>,
    #[serde(default, rename = "mcpServers", skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<HashMap<String, McpServerConfig>>,
}

/// Loads the plugin rooted at `root` into a validated [`Plugin`].
///
/// Path overrides are checked before any component is read, in the order
/// commands, agents, skills, hooks, mcpServers, so the first containment
/// violation surfaced is deterministic.
pub async fn load_claude_plugin(root: impl AsRef<Path>) -> Result<Plugin, PluginError> {
    let root = root.as_ref();
    let manifest = PluginManifest::load(root).await?;
    let layout = PluginLayout::resolve(root, &manifest)?;

    let commands = commands::load_commands(&layout.commands).await?;
    let agents = agents::load_agents(&layout.agents).await?;
    let skills = skills::load_skills(&layout.skills).await?;
    let hooks = hooks::load_hooks(&layout.hooks, root).await?;
    let mcp_servers = mcp::load_mcp_servers(&manifest, &layout.mcp).await?;

    tracing::debug!(
        plugin = %manifest.name,
        agents = agents.len(),
        commands = commands.len(),
        skills = skills.len(),
        hooks = hooks.is_some(),
        mcp_servers = mcp_servers.as_ref().map_or(0, HashMap::len),
        "plugin assembled"
    );

    Ok(Plugin {
        manifest,
        agents,
        commands,
        skills,
        hooks,
        mcp_servers,
    })
}
