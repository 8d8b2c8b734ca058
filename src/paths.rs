//! Plugin directory layout and path containment.
//!
//! Every path a manifest can declare is resolved against the plugin root and
//! lexically normalized before use. A resolved path that leaves the root is
//! fatal for the whole load.

use std::path::{Component, Path, PathBuf};

use crate::error::PluginError;
use crate::manifest::{McpServersDecl, PluginManifest};

pub(crate) const PLUGIN_CONFIG_DIR: &str = ".claude-plugin";
pub(crate) const PLUGIN_MANIFEST_FILE: &str = "plugin.json";

pub(crate) const DEFAULT_COMMANDS_DIR: &str = "commands";
pub(crate) const DEFAULT_AGENTS_DIR: &str = "agents";
pub(crate) const DEFAULT_SKILLS_DIR: &str = "skills";
pub(crate) const DEFAULT_HOOKS_FILE: &str = "hooks/hooks.json";
pub(crate) const DEFAULT_MCP_FILE: &str = ".mcp.json";

pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}

pub(crate) fn is_skill_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("SKILL.md") || name.ends_with(".skill.md"))
}

/// Collapses `.` and `..` segments without touching the filesystem.
///
/// Excess `..` segments in an absolute path clamp at the filesystem root,
/// matching what the declared paths would resolve to at runtime.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(comp),
            },
            other => parts.push(other),
        }
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Resolves a declared (or default) path against the plugin root.
///
/// The normalized result must be the root itself or a descendant of it. On
/// violation the error carries `field` and the declared string exactly as
/// written in the manifest, so diagnostics match the user's declaration.
pub(crate) fn resolve_within_root(
    root: &Path,
    declared: &str,
    field: &'static str,
) -> Result<PathBuf, PluginError> {
    let resolved = normalize(&root.join(declared));
    if resolved.starts_with(normalize(root)) {
        Ok(resolved)
    } else {
        Err(PluginError::PathEscapesRoot {
            field,
            declared: declared.to_string(),
        })
    }
}

/// Resolved component locations for one plugin load.
///
/// Directory fields hold the default location first, followed by the custom
/// override when the manifest declares one; loaders scan all of them and
/// union the results. The hooks entries are files, not directories. `mcp` is
/// the single fallback config file (the inline manifest map, when present,
/// bypasses it).
#[derive(Debug)]
pub(crate) struct PluginLayout {
    pub commands: Vec<PathBuf>,
    pub agents: Vec<PathBuf>,
    pub skills: Vec<PathBuf>,
    pub hooks: Vec<PathBuf>,
    pub mcp: PathBuf,
}

impl PluginLayout {
    /// Validates every declared override eagerly, in a fixed order
    /// (commands, agents, skills, hooks, mcpServers) so the first violation
    /// surfaced is deterministic.
    pub(crate) fn resolve(root: &Path, manifest: &PluginManifest) -> Result<Self, PluginError> {
        let commands = Self::resolve_set(
            root,
            DEFAULT_COMMANDS_DIR,
            manifest.commands.as_deref(),
            "commands",
        )?;
        let agents = Self::resolve_set(
            root,
            DEFAULT_AGENTS_DIR,
            manifest.agents.as_deref(),
            "agents",
        )?;
        let skills = Self::resolve_set(
            root,
            DEFAULT_SKILLS_DIR,
            manifest.skills.as_deref(),
            "skills",
        )?;
        let hooks = Self::resolve_set(
            root,
            DEFAULT_HOOKS_FILE,
            manifest.hooks.as_deref(),
            "hooks",
        )?;

        let mcp = match &manifest.mcp_servers {
            Some(McpServersDecl::Path(declared)) => {
                resolve_within_root(root, declared, "mcpServers")?
            }
            _ => resolve_within_root(root, DEFAULT_MCP_FILE, "mcpServers")?,
        };

        Ok(Self {
            commands,
            agents,
            skills,
            hooks,
            mcp,
        })
    }

    fn resolve_set(
        root: &Path,
        default: &str,
        custom: Option<&str>,
        field: &'static str,
    ) -> Result<Vec<PathBuf>, PluginError> {
        let mut paths = vec![resolve_within_root(root, default, field)?];
        if let Some(declared) = custom {
            paths.push(resolve_within_root(root, declared, field)?);
        }
        Ok(paths)
    }
}
