//! Agent descriptors loaded from `agents/` markdown files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::frontmatter::{parse_frontmatter, require_field};
use crate::paths::is_markdown;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AgentFrontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    capabilities: Vec<String>,
}

/// Loads every agent file under the given directories, default location
/// first. A directory that does not exist contributes nothing.
pub(crate) async fn load_agents(dirs: &[PathBuf]) -> Result<Vec<Agent>, PluginError> {
    let mut agents = Vec::new();
    for dir in dirs {
        if !dir.exists() {
            continue;
        }
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_file() && is_markdown(&path) {
                agents.push(load_agent_file(&path).await?);
            }
        }
    }
    Ok(agents)
}

async fn load_agent_file(path: &Path) -> Result<Agent, PluginError> {
    let content = tokio::fs::read_to_string(path).await?;
    let doc = parse_frontmatter::<AgentFrontmatter>(&content).map_err(|e| {
        PluginError::InvalidComponent {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    Ok(Agent {
        name: require_field(doc.frontmatter.name, "name", path)?,
        description: require_field(doc.frontmatter.description, "description", path)?,
        capabilities: doc.frontmatter.capabilities,
        path: path.to_path_buf(),
    })
}
