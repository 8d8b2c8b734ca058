//! Plugin discovery across installation directories.

use std::path::{Path, PathBuf};

use crate::error::PluginError;
use crate::loader::{Plugin, load_claude_plugin};
use crate::paths::PLUGIN_CONFIG_DIR;

pub struct PluginDiscovery;

impl PluginDiscovery {
    /// Returns the default plugins directory: `~/.claude/plugins/`.
    pub fn default_plugins_dir() -> Option<PathBuf> {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".claude").join("plugins"))
    }

    /// Loads every plugin found under the given directories.
    ///
    /// A directory that is itself a plugin root (holds `.claude-plugin/`)
    /// is loaded directly; otherwise its immediate children are scanned.
    /// Nonexistent directories are skipped.
    pub async fn discover(dirs: &[PathBuf]) -> Result<Vec<Plugin>, PluginError> {
        let mut plugins = Vec::new();

        for dir in dirs {
            if !dir.exists() {
                continue;
            }

            if Self::is_plugin_root(dir) {
                plugins.push(load_claude_plugin(dir).await?);
                continue;
            }

            let mut entries = tokio::fs::read_dir(dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.is_dir() && Self::is_plugin_root(&path) {
                    tracing::debug!(path = %path.display(), "discovered plugin root");
                    plugins.push(load_claude_plugin(&path).await?);
                }
            }
        }

        Ok(plugins)
    }

    fn is_plugin_root(dir: &Path) -> bool {
        dir.join(PLUGIN_CONFIG_DIR).is_dir()
    }
}
