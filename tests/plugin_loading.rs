//! End-to-end plugin loading tests.
//!
//! Each test builds a plugin directory in a tempdir and drives the public
//! entry point, covering the full bundle shape, default/custom path
//! merging, the MCP fallback file, and path containment rejection.

use std::path::Path;

use claude_plugin::{PluginError, load_claude_plugin};
use tempfile::{TempDir, tempdir};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn agent_file(name: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: Agent {name}\ncapabilities:\n  - Capability A\n  - Capability B\n---\nAgent prompt.\n"
    )
}

fn command_file(name: &str, tools_yaml: &str) -> String {
    format!("---\nname: {name}\ndescription: Command {name}\n{tools_yaml}---\nCommand body.\n")
}

/// The full bundle: two agents, six commands, one skill, a hooks file, and
/// inline MCP servers.
fn sample_plugin() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(
        root,
        ".claude-plugin/plugin.json",
        r#"{
            "name": "sample-plugin",
            "mcpServers": {
                "remote-test": {"url": "https://example.com/mcp"}
            }
        }"#,
    );

    write(root, "agents/agent-one.md", &agent_file("agent-one"));
    write(root, "agents/agent-two.md", &agent_file("agent-two"));

    write(
        root,
        "commands/command-one.md",
        &command_file(
            "command-one",
            "allowed-tools:\n  - Read\n  - Write\n  - Bash(ls:*)\n  - Bash(git:*)\n",
        ),
    );
    write(
        root,
        "commands/command-two.md",
        &command_file("command-two", "allowed-tools:\n  - Read\n  - Edit\n"),
    );
    write(
        root,
        "commands/skill-command.md",
        &command_file(
            "skill-command",
            "allowed-tools:\n  - Skill(create-agent-skills)\n",
        ),
    );
    write(
        root,
        "commands/model-command.md",
        &command_file("model-command", "allowed-tools:\n  - WebFetch\nmodel: haiku\n"),
    );
    write(
        root,
        "commands/pattern-command.md",
        &command_file(
            "pattern-command",
            "allowed-tools:\n  - Read(.env)\n  - Bash(git:*)\n",
        ),
    );
    write(
        root,
        "commands/todo-command.md",
        &command_file(
            "todo-command",
            "allowed-tools:\n  - Question\n  - TodoWrite\n  - TodoRead\n",
        ),
    );

    write(
        root,
        "skills/create-agent-skills/SKILL.md",
        "---\nname: create-agent-skills\ndescription: Author new skills\n---\nHow to write skills.\n",
    );

    write(
        root,
        "hooks/hooks.json",
        r#"{"hooks":{"PreToolUse":[{"matcher":"Bash","hooks":[{"type":"command","command":"echo pre"}]}]}}"#,
    );

    dir
}

#[tokio::test]
async fn loads_manifest_agents_commands_skills_hooks() {
    let dir = sample_plugin();
    let plugin = load_claude_plugin(dir.path()).await.unwrap();

    assert_eq!(plugin.manifest.name, "sample-plugin");
    assert_eq!(plugin.agents.len(), 2);
    assert_eq!(plugin.commands.len(), 6);
    assert_eq!(plugin.skills.len(), 1);
    assert!(plugin.hooks.is_some());
    assert!(plugin.mcp_servers.is_some());

    let agent_one = plugin.agents.iter().find(|a| a.name == "agent-one").unwrap();
    assert_eq!(agent_one.capabilities, vec!["Capability A", "Capability B"]);

    let find = |name: &str| {
        plugin
            .commands
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("missing command {name}"))
    };
    assert_eq!(
        find("command-one").allowed_tools,
        vec!["Read", "Write", "Bash(ls:*)", "Bash(git:*)"]
    );
    assert_eq!(find("command-two").allowed_tools, vec!["Read", "Edit"]);
    assert_eq!(
        find("skill-command").allowed_tools,
        vec!["Skill(create-agent-skills)"]
    );
    assert_eq!(find("model-command").allowed_tools, vec!["WebFetch"]);
    assert_eq!(
        find("pattern-command").allowed_tools,
        vec!["Read(.env)", "Bash(git:*)"]
    );
    assert_eq!(
        find("todo-command").allowed_tools,
        vec!["Question", "TodoWrite", "TodoRead"]
    );

    let servers = plugin.mcp_servers.as_ref().unwrap();
    assert_eq!(
        servers["remote-test"].url.as_deref(),
        Some("https://example.com/mcp")
    );
}

#[tokio::test]
async fn loads_mcp_servers_from_fallback_file_when_manifest_is_empty() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".claude-plugin/plugin.json", r#"{"name":"mcp-file"}"#);
    write(
        dir.path(),
        ".mcp.json",
        r#"{"mcpServers":{"remote":{"url":"https://example.com/stream"}}}"#,
    );

    let plugin = load_claude_plugin(dir.path()).await.unwrap();
    let servers = plugin.mcp_servers.unwrap();
    assert_eq!(
        servers["remote"].url.as_deref(),
        Some("https://example.com/stream")
    );
}

#[tokio::test]
async fn merges_default_and_custom_component_paths() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        ".claude-plugin/plugin.json",
        r#"{
            "name": "custom-paths",
            "agents": "custom-agents",
            "commands": "custom-commands",
            "skills": "custom-skills",
            "hooks": "custom-hooks.json"
        }"#,
    );

    write(
        root,
        "agents/default-agent.md",
        "---\nname: default-agent\ndescription: Default agent\n---\n",
    );
    write(
        root,
        "custom-agents/custom-agent.md",
        "---\nname: custom-agent\ndescription: Custom agent\n---\n",
    );
    write(
        root,
        "commands/default-command.md",
        "---\nname: default-command\ndescription: Default command\n---\n",
    );
    write(
        root,
        "custom-commands/custom-command.md",
        "---\nname: custom-command\ndescription: Custom command\n---\n",
    );
    write(
        root,
        "skills/default-skill/SKILL.md",
        "---\nname: default-skill\ndescription: Default skill\n---\n",
    );
    write(
        root,
        "custom-skills/custom-skill/SKILL.md",
        "---\nname: custom-skill\ndescription: Custom skill\n---\n",
    );
    write(
        root,
        "hooks/hooks.json",
        r#"{"hooks":{"PreToolUse":[{"hooks":[{"type":"command","command":"echo default"}]}]}}"#,
    );
    write(
        root,
        "custom-hooks.json",
        r#"{"hooks":{"PostToolUse":[{"hooks":[{"type":"command","command":"echo custom"}]}]}}"#,
    );

    let plugin = load_claude_plugin(root).await.unwrap();

    let mut agent_names: Vec<&str> = plugin.agents.iter().map(|a| a.name.as_str()).collect();
    agent_names.sort_unstable();
    assert_eq!(agent_names, vec!["custom-agent", "default-agent"]);

    let mut command_names: Vec<&str> = plugin.commands.iter().map(|c| c.name.as_str()).collect();
    command_names.sort_unstable();
    assert_eq!(command_names, vec!["custom-command", "default-command"]);

    let mut skill_names: Vec<&str> = plugin.skills.iter().map(|s| s.name.as_str()).collect();
    skill_names.sort_unstable();
    assert_eq!(skill_names, vec!["custom-skill", "default-skill"]);

    let hooks = plugin.hooks.unwrap();
    assert_eq!(hooks.hooks["PreToolUse"][0].hooks[0].command, "echo default");
    assert_eq!(hooks.hooks["PostToolUse"][0].hooks[0].command, "echo custom");
}

#[tokio::test]
async fn rejects_command_paths_that_escape_the_plugin_root() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        ".claude-plugin/plugin.json",
        r#"{"name":"invalid-command-path","commands":"../outside-commands"}"#,
    );

    let err = load_claude_plugin(dir.path()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid commands path: ../outside-commands. Paths must stay within the plugin root."
    );
}

#[tokio::test]
async fn rejects_hook_paths_that_escape_the_plugin_root() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        ".claude-plugin/plugin.json",
        r#"{"name":"invalid-hooks-path","hooks":"../outside-hooks.json"}"#,
    );

    let err = load_claude_plugin(dir.path()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid hooks path: ../outside-hooks.json. Paths must stay within the plugin root."
    );
}

#[tokio::test]
async fn rejects_mcp_paths_that_escape_the_plugin_root() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        ".claude-plugin/plugin.json",
        r#"{"name":"invalid-mcp-path","mcpServers":"../outside-mcp.json"}"#,
    );

    let err = load_claude_plugin(dir.path()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid mcpServers path: ../outside-mcp.json. Paths must stay within the plugin root."
    );
}

#[tokio::test]
async fn containment_error_is_typed() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        ".claude-plugin/plugin.json",
        r#"{"name":"p","agents":"agents/../../elsewhere"}"#,
    );

    let err = load_claude_plugin(dir.path()).await.unwrap_err();
    match err {
        PluginError::PathEscapesRoot { field, declared } => {
            assert_eq!(field, "agents");
            assert_eq!(declared, "agents/../../elsewhere");
        }
        other => panic!("Expected PathEscapesRoot, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_loads_are_structurally_equal() {
    let dir = sample_plugin();
    let first = load_claude_plugin(dir.path()).await.unwrap();
    let second = load_claude_plugin(dir.path()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn inline_mcp_servers_shadow_the_fallback_file() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        ".claude-plugin/plugin.json",
        r#"{"name":"p","mcpServers":{"inline":{"command":"npx","args":["server"]}}}"#,
    );
    write(
        dir.path(),
        ".mcp.json",
        r#"{"mcpServers":{"shadowed":{"url":"https://example.com"}}}"#,
    );

    let plugin = load_claude_plugin(dir.path()).await.unwrap();
    let servers = plugin.mcp_servers.unwrap();
    assert_eq!(servers.len(), 1);
    assert_eq!(servers["inline"].command.as_deref(), Some("npx"));
}

#[tokio::test]
async fn malformed_hooks_file_fails_the_load() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".claude-plugin/plugin.json", r#"{"name":"p"}"#);
    write(dir.path(), "hooks/hooks.json", r#"{"hooks":{"PreToolUse":[{"hooks":[{"type":"command"}]}]}}"#);

    let err = load_claude_plugin(dir.path()).await.unwrap_err();
    match err {
        PluginError::InvalidHooks { path, .. } => assert!(path.ends_with("hooks/hooks.json")),
        other => panic!("Expected InvalidHooks, got {other:?}"),
    }
}
