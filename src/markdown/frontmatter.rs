//! Frontmatter extraction from YAML (`---`) or TOML (`+++`) blocks.

use serde_json::{Map, Value};

use crate::content::ContentError;

/// Raw frontmatter fields, keyed as written in the source.
pub type JsonMap = Map<String, Value>;

/// Split `content` into `(frontmatter, body)`.
///
/// Returns `Ok(None)` when the file has no frontmatter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(JsonMap, &str)>, ContentError> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => Ok(Some((parse_toml(fm)?, body))),
        Some((fm, body, false)) => Ok(Some((parse_yaml(fm)?, body))),
        None => Ok(None),
    }
}

/// Strip a frontmatter block if there is one, returning the body.
pub fn strip_frontmatter(content: &str) -> &str {
    detect_frontmatter(content).map_or(content, |(_, body, _)| body)
}

/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if !trimmed.starts_with(fence) {
            continue;
        }
        let closing = format!("\n{fence}");
        let end = trimmed[3..].find(&closing)?;
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches(['\r', '\n']);
        return Some((fm, body, is_toml));
    }

    None
}

/// Parse TOML frontmatter, turning datetimes into plain strings.
fn parse_toml(content: &str) -> Result<JsonMap, ContentError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| ContentError::Frontmatter(e.to_string()))?;
    Ok(table
        .into_iter()
        .map(|(k, v)| (k, toml_to_json(v)))
        .collect())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Parse YAML frontmatter. An empty block is an empty map.
fn parse_yaml(content: &str) -> Result<JsonMap, ContentError> {
    if content.trim().is_empty() {
        return Ok(JsonMap::new());
    }
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| ContentError::Frontmatter(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        other => Err(ContentError::Frontmatter(format!(
            "expected a mapping, found `{other}`"
        ))),
    }
}
