//! Command descriptors loaded from `commands/` markdown files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PluginError;
use crate::frontmatter::{parse_frontmatter, require_field};
use crate::paths::is_markdown;
use crate::tools::{is_tool_allowed, parse_tool_list};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    /// Permission expressions exactly as declared: order and duplicates kept.
    #[serde(default)]
    pub allowed_tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub path: PathBuf,
}

impl Command {
    pub fn has_tool_restrictions(&self) -> bool {
        !self.allowed_tools.is_empty()
    }

    pub fn is_tool_allowed(&self, tool_name: &str) -> bool {
        is_tool_allowed(&self.allowed_tools, tool_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CommandFrontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "tool_list")]
    allowed_tools: Vec<String>,
    #[serde(default)]
    argument_hint: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

/// Accepts the list form (`allowed-tools: ["Read", "Bash(git:*)"]`) and the
/// comma-separated shorthand (`allowed-tools: Read, Bash(git:*)`).
fn tool_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Declared {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Option::<Declared>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Declared::List(items)) => items,
        Some(Declared::Csv(line)) => line
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    })
}

pub(crate) async fn load_commands(dirs: &[PathBuf]) -> Result<Vec<Command>, PluginError> {
    let mut commands = Vec::new();
    for dir in dirs {
        if !dir.exists() {
            continue;
        }
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() && is_markdown(&path) {
                commands.push(load_command_file(&path).await?);
            }
        }
    }
    Ok(commands)
}

async fn load_command_file(path: &Path) -> Result<Command, PluginError> {
    let content = tokio::fs::read_to_string(path).await?;
    let doc = parse_frontmatter::<CommandFrontmatter>(&content).map_err(|e| {
        PluginError::InvalidComponent {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let allowed_tools =
        parse_tool_list(&doc.frontmatter.allowed_tools).map_err(|e| {
            PluginError::InvalidComponent {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

    Ok(Command {
        name: require_field(doc.frontmatter.name, "name", path)?,
        description: require_field(doc.frontmatter.description, "description", path)?,
        allowed_tools,
        argument_hint: doc.frontmatter.argument_hint,
        model: doc.frontmatter.model,
        path: path.to_path_buf(),
    })
}
