//! Skill descriptors loaded from `skills/` subdirectories.
//!
//! Each skill is a directory holding a `SKILL.md` (or `*.skill.md`) file;
//! the descriptor records the directory, not the file, as the skill's
//! location. Subdirectories without a skill file are not skills and are
//! skipped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::frontmatter::{parse_frontmatter, require_field};
use crate::paths::is_skill_file;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// The skill's directory under the plugin root.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SkillFrontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

pub(crate) async fn load_skills(dirs: &[PathBuf]) -> Result<Vec<Skill>, PluginError> {
    let mut skills = Vec::new();
    for dir in dirs {
        if !dir.exists() {
            continue;
        }
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let skill_dir = entry.path();
            if !skill_dir.is_dir() {
                continue;
            }
            if let Some(skill_file) = find_skill_file(&skill_dir).await? {
                skills.push(load_skill(&skill_dir, &skill_file).await?);
            }
        }
    }
    Ok(skills)
}

async fn find_skill_file(dir: &Path) -> Result<Option<PathBuf>, PluginError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && is_skill_file(&path) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

async fn load_skill(skill_dir: &Path, skill_file: &Path) -> Result<Skill, PluginError> {
    let content = tokio::fs::read_to_string(skill_file).await?;
    let doc = parse_frontmatter::<SkillFrontmatter>(&content).map_err(|e| {
        PluginError::InvalidComponent {
            path: skill_file.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    Ok(Skill {
        name: require_field(doc.frontmatter.name, "name", skill_file)?,
        description: require_field(doc.frontmatter.description, "description", skill_file)?,
        path: skill_dir.to_path_buf(),
    })
}
