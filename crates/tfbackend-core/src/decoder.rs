//! YAML decoder — turns backend-config YAML text into a [`ConfigValue`] tree.
//!
//! Parsing goes through `serde_yaml::Value`, whose `Mapping` keeps insertion
//! order, and is then narrowed to the shapes an HCL attribute file can express.
//! Anything a safe YAML loader would reject (custom tags, collection keys) is
//! reported as [`TfBackendError::UnsupportedYaml`]; callers on the permissive
//! path treat every decoder error as "this is not YAML".

use crate::error::{Result, TfBackendError};
use crate::types::ConfigValue;
use serde_yaml::Value;

/// Parse YAML text into a [`ConfigValue`].
///
/// Blank and comment-only documents decode to [`ConfigValue::Null`], the same
/// as a document holding only `null` or `~`. `<<` merge keys are resolved
/// before conversion; keys written explicitly win over merged ones.
pub fn parse_yaml(text: &str) -> Result<ConfigValue> {
    if is_blank_document(text) {
        return Ok(ConfigValue::Null);
    }
    let mut value: Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    convert(&value)
}

fn convert(value: &Value) -> Result<ConfigValue> {
    match value {
        Value::Null => Ok(ConfigValue::Null),
        Value::Bool(b) => Ok(ConfigValue::Bool(*b)),
        Value::Number(n) => Ok(convert_number(n)),
        Value::String(s) => Ok(ConfigValue::String(s.clone())),
        Value::Sequence(items) => items
            .iter()
            .map(convert)
            .collect::<Result<Vec<_>>>()
            .map(ConfigValue::Sequence),
        Value::Mapping(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, val) in map {
                entries.push((mapping_key(key)?, convert(val)?));
            }
            Ok(ConfigValue::Mapping(entries))
        }
        Value::Tagged(tagged) => Err(TfBackendError::UnsupportedYaml {
            message: format!("custom tag {} is not allowed", tagged.tag),
        }),
    }
}

fn convert_number(n: &serde_yaml::Number) -> ConfigValue {
    if let Some(i) = n.as_i64() {
        return ConfigValue::Integer(i.into());
    }
    if let Some(u) = n.as_u64() {
        return ConfigValue::Integer(u.into());
    }
    match n.as_f64() {
        Some(f) => ConfigValue::from(f),
        None => ConfigValue::Other(n.to_string()),
    }
}

/// Render a scalar mapping key as text. Collection keys have no HCL spelling.
fn mapping_key(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Sequence(_) | Value::Mapping(_) => Err(TfBackendError::UnsupportedYaml {
            message: "mapping keys must be scalars".to_string(),
        }),
        Value::Tagged(tagged) => Err(TfBackendError::UnsupportedYaml {
            message: format!("custom tag {} is not allowed on a key", tagged.tag),
        }),
    }
}

/// True when the text holds no YAML content: only whitespace and comments.
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    })
}
