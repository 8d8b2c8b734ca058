use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Plugin manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid plugin manifest at {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Invalid {field} path: {declared}. Paths must stay within the plugin root.")]
    PathEscapesRoot { field: &'static str, declared: String },

    #[error("Invalid component file {path}: {reason}")]
    InvalidComponent { path: PathBuf, reason: String },

    #[error("Invalid hooks config at {path}: {reason}")]
    InvalidHooks { path: PathBuf, reason: String },

    #[error("Invalid MCP config at {path}: {reason}")]
    InvalidMcp { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
