//! # claude-plugin
//!
//! Loader for Claude plugin bundles.
//!
//! A plugin is a directory with a `.claude-plugin/plugin.json` manifest,
//! containing any combination of:
//! - `agents/` — agent definitions (markdown with YAML frontmatter)
//! - `commands/` — slash-command definitions, including their allowed-tools
//!   permission lists
//! - `skills/` — skill directories, each holding a `SKILL.md`
//! - `hooks/hooks.json` — lifecycle hook configuration
//! - `.mcp.json` — MCP server connection descriptors
//!
//! The manifest may relocate any of these; a custom location is scanned in
//! addition to the default one, and every resolved path must stay inside
//! the plugin root. [`load_claude_plugin`] assembles the whole bundle into
//! one validated [`Plugin`] value or fails on the first invalid piece.
//!
//! # Directory Structure
//!
//! ```text
//! my-plugin/
//! ├── .claude-plugin/
//! │   └── plugin.json
//! ├── agents/
//! │   └── reviewer.md
//! ├── commands/
//! │   └── hello.md
//! ├── skills/
//! │   └── commit/
//! │       └── SKILL.md
//! ├── hooks/
//! │   └── hooks.json
//! └── .mcp.json
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use claude_plugin::load_claude_plugin;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), claude_plugin::PluginError> {
//!     let plugin = load_claude_plugin("./my-plugin").await?;
//!     println!(
//!         "{}: {} agents, {} commands, {} skills",
//!         plugin.manifest.name,
//!         plugin.agents.len(),
//!         plugin.commands.len(),
//!         plugin.skills.len(),
//!     );
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod agents;
mod commands;
mod discovery;
mod error;
mod frontmatter;
mod hooks;
mod loader;
mod manifest;
mod mcp;
mod paths;
mod skills;
pub mod tools;

pub use agents::Agent;
pub use commands::Command;
pub use discovery::PluginDiscovery;
pub use error::PluginError;
pub use frontmatter::{FrontmatterError, ParsedDocument, parse_frontmatter};
pub use hooks::{HookAction, HookRule, HooksConfig};
pub use loader::{Plugin, load_claude_plugin};
pub use manifest::{McpServersDecl, PluginAuthor, PluginManifest};
pub use mcp::McpServerConfig;
pub use skills::Skill;
pub use tools::{ToolPermissionError, is_tool_allowed, matches_tool_pattern, parse_tool_list};

pub type Result<T> = std::result::Result<T, PluginError>;
