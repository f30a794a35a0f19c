//! Front-matter splitting and parsing.
//!
//! Content files open with an optional YAML metadata block delimited by `---`
//! lines, followed by the markdown body:
//!
//! ```text
//! ---
//! title: Rebuilding the studio site
//! date: 2024-06-01
//! tags: [design, web]
//! ---
//! Body text...
//! ```
//!
//! The metadata is parsed into a `serde_json::Map` so that callers get one
//! uniform value model for front-matter, locale files, and the image manifest.
//! A file with no opening `---` line is all body; an opening marker without a
//! closing one is a parse error, not silently treated as body.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front-matter block is never closed")]
    Unclosed,
    #[error("front-matter is not a key/value mapping")]
    NotAMapping,
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split a content file into its front-matter mapping and markdown body.
///
/// Returns an empty mapping when the file has no front-matter block. The body
/// is returned raw, with the blank line after the closing marker stripped.
pub fn split(content: &str) -> Result<(Map<String, Value>, &str), FrontMatterError> {
    let Some(rest) = content.strip_prefix("---\n").or_else(|| content.strip_prefix("---\r\n"))
    else {
        return Ok((Map::new(), content));
    };

    let Some(end) = rest.find("\n---") else {
        return Err(FrontMatterError::Unclosed);
    };

    let yaml = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

    if yaml.trim().is_empty() {
        return Ok((Map::new(), body));
    }

    let value: Value = serde_yaml::from_str(yaml)?;
    match value {
        Value::Object(map) => Ok((map, body)),
        Value::Null => Ok((Map::new(), body)),
        _ => Err(FrontMatterError::NotAMapping),
    }
}
