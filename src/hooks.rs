//! Hook bindings loaded from hooks configuration files.
//!
//! A hooks file maps lifecycle event names (`PreToolUse`, `PostToolUse`,
//! `SessionStart`, ...) to rule lists. When both the default file and a
//! manifest-declared custom file exist, their rule lists are concatenated
//! per event name; entries are never overwritten.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

pub(crate) const PLUGIN_ROOT_VAR: &str = "${CLAUDE_PLUGIN_ROOT}";

/// Event-keyed hook configuration, merged across every hooks file found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HooksConfig {
    pub hooks: HashMap<String, Vec<HookRule>>,
}

/// One rule: an optional matcher scoping the actions to particular tools.
///
/// Format: `{"matcher": "Write|Edit", "hooks": [{"type": "command", "command": "..."}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
    pub hooks: Vec<HookAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookAction {
    #[serde(rename = "type")]
    pub hook_type: String,
    pub command: String,
}

fn resolve_plugin_root(value: &str, root: &Path) -> String {
    value.replace(PLUGIN_ROOT_VAR, &root.display().to_string())
}

/// Reads each hooks file that exists and merges them per event name, in the
/// order given (default file first, then the custom one). Returns `None`
/// when no file exists.
pub(crate) async fn load_hooks(
    files: &[PathBuf],
    root: &Path,
) -> Result<Option<HooksConfig>, PluginError> {
    let mut merged: Option<HooksConfig> = None;

    for file in files {
        if !file.exists() {
            continue;
        }
        let content = tokio::fs::read_to_string(file).await?;
        let parsed: HooksConfig =
            serde_json::from_str(&content).map_err(|e| PluginError::InvalidHooks {
                path: file.clone(),
                reason: e.to_string(),
            })?;

        let target = merged.get_or_insert_with(HooksConfig::default);
        for (event, mut rules) in parsed.hooks {
            for rule in &mut rules {
                for action in &mut rule.hooks {
                    action.command = resolve_plugin_root(&action.command, root);
                }
            }
            target.hooks.entry(event).or_default().extend(rules);
        }
    }

    Ok(merged)
}
