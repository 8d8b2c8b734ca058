//! Tool-permission expressions.
//!
//! A command declares the tools it may use as an ordered list of permission
//! expressions. Two lexical forms exist: a bare token (`Read`, `WebFetch`)
//! and a parameterized one (`Bash(git:*)`, `Skill(create-agent-skills)`)
//! whose argument is an arbitrary non-empty string. The tool name is never
//! checked against a registry here; enforcement belongs to the host.

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ToolPermissionError {
    #[error("empty permission expression")]
    Empty,

    #[error("missing tool name in '{0}'")]
    MissingName(String),

    #[error("missing closing parenthesis in '{0}'")]
    Unterminated(String),

    #[error("empty argument in '{0}'")]
    EmptyArgument(String),

    #[error("unexpected ')' in '{0}'")]
    UnexpectedParen(String),
}

/// Validates a declared tool list.
///
/// Expressions pass through unchanged: the returned list preserves order,
/// duplicates, and the exact declared syntax.
pub fn parse_tool_list(declared: &[String]) -> Result<Vec<String>, ToolPermissionError> {
    declared
        .iter()
        .map(|expr| {
            validate_expression(expr)?;
            Ok(expr.clone())
        })
        .collect()
}

fn validate_expression(expr: &str) -> Result<(), ToolPermissionError> {
    if expr.is_empty() {
        return Err(ToolPermissionError::Empty);
    }
    match expr.find('(') {
        None if expr.contains(')') => Err(ToolPermissionError::UnexpectedParen(expr.to_string())),
        None => Ok(()),
        Some(0) => Err(ToolPermissionError::MissingName(expr.to_string())),
        Some(open) => {
            let argument = expr[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| ToolPermissionError::Unterminated(expr.to_string()))?;
            if argument.is_empty() {
                return Err(ToolPermissionError::EmptyArgument(expr.to_string()));
            }
            Ok(())
        }
    }
}

/// Checks whether a tool name matches one allowed pattern.
///
/// A parameterized pattern matches on its base name: `Bash(git:*)` admits
/// the tool `Bash`. Interpreting the argument is left to the host.
pub fn matches_tool_pattern(pattern: &str, tool_name: &str) -> bool {
    let base = &pattern[..pattern.find('(').unwrap_or(pattern.len())];
    base == tool_name || pattern == tool_name
}

/// Checks a tool against a permission list; an empty list means unrestricted.
pub fn is_tool_allowed(allowed: &[String], tool_name: &str) -> bool {
    if allowed.is_empty() {
        return true;
    }
    allowed.iter().any(|p| matches_tool_pattern(p, tool_name))
}
