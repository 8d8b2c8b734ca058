//! Frontmatter extraction for component files.
//!
//! Component files carry a leading `---`-delimited YAML block with their
//! declared fields, followed by free-form body text. Extraction is purely
//! syntactic: a file without a block yields the frontmatter type's default
//! and the full text as body. Whether required fields are present is the
//! calling loader's judgment, not the extractor's.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::PluginError;

pub struct ParsedDocument<F> {
    pub frontmatter: F,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("frontmatter not terminated with ---")]
    Unterminated,
    #[error("invalid frontmatter: {0}")]
    Invalid(String),
}

pub fn parse_frontmatter<F>(content: &str) -> Result<ParsedDocument<F>, FrontmatterError>
where
    F: DeserializeOwned + Default,
{
    let Some(after_first) = content.strip_prefix("---") else {
        return Ok(ParsedDocument {
            frontmatter: F::default(),
            body: content.to_string(),
        });
    };

    let end_pos = after_first
        .find("---")
        .ok_or(FrontmatterError::Unterminated)?;

    let frontmatter_str = after_first[..end_pos].trim();
    let body = after_first[end_pos + 3..].trim().to_string();

    let frontmatter = if frontmatter_str.is_empty() {
        F::default()
    } else {
        serde_yaml_ng::from_str(frontmatter_str)
            .map_err(|e| FrontmatterError::Invalid(e.to_string()))?
    };

    Ok(ParsedDocument { frontmatter, body })
}

/// Rejects an absent or empty required field, naming the offending file.
pub(crate) fn require_field(
    value: Option<String>,
    field: &str,
    path: &Path,
) -> Result<String, PluginError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PluginError::InvalidComponent {
            path: path.to_path_buf(),
            reason: format!("missing required field: {field}"),
        })
}
