//! Format detection and normalization of backend-config text.
//!
//! There is no HCL parser here. Detection is "does it parse as a YAML
//! mapping": if so it is rewritten as HCL, otherwise the text is assumed to be
//! HCL already and passed through byte-for-byte. A document that decodes to
//! `null` (empty, comments only, `~`) has no assignments and yields empty
//! content.

use crate::decoder::parse_yaml;
use crate::encoder::encode_document;
use crate::error::{Result, TfBackendError};
use crate::types::ConfigValue;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// File extension for staged backend configs. Terraform's
/// `-backend-config` convention expects this exact suffix.
pub const BACKEND_EXTENSION: &str = ".tfbackend";

/// Which input format a backend config turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// A YAML mapping, converted to HCL.
    Yaml,
    /// Anything else that was not empty, passed through unchanged.
    Hcl,
    /// A document with no content.
    Empty,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Yaml => "yaml",
            SourceFormat::Hcl => "hcl",
            SourceFormat::Empty => "empty",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend-config text guaranteed to be in `.tfbackend` (HCL) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub content: String,
    pub format: SourceFormat,
}

impl Normalized {
    fn passthrough(text: &str) -> Self {
        Self {
            content: text.to_string(),
            format: SourceFormat::Hcl,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            content: String::new(),
            format: SourceFormat::Empty,
        }
    }

    /// Always [`BACKEND_EXTENSION`].
    pub fn extension(&self) -> &'static str {
        BACKEND_EXTENSION
    }

    /// Split into the `(content, extension)` pair handed to the staging layer.
    pub fn into_parts(self) -> (String, &'static str) {
        (self.content, BACKEND_EXTENSION)
    }
}

/// Outcome of the YAML probe, before the non-mapping policy is applied.
enum Probe {
    NotYaml,
    Null,
    Mapping(Vec<(String, ConfigValue)>),
    OtherShape(&'static str),
}

fn probe(text: &str) -> Probe {
    match parse_yaml(text) {
        Err(err) if err.is_duplicate_key() => {
            warn!(error = %err, "YAML repeats a key, passing it through unconverted");
            Probe::NotYaml
        }
        Err(err) => {
            debug!(error = %err, "input is not YAML, treating as HCL");
            Probe::NotYaml
        }
        Ok(ConfigValue::Null) => Probe::Null,
        Ok(ConfigValue::Mapping(entries)) => Probe::Mapping(entries),
        Ok(other) => Probe::OtherShape(other.kind()),
    }
}

/// Detect the format without producing output.
pub fn detect_format(text: &str) -> SourceFormat {
    match probe(text) {
        Probe::NotYaml | Probe::OtherShape(_) => SourceFormat::Hcl,
        Probe::Null => SourceFormat::Empty,
        Probe::Mapping(_) => SourceFormat::Yaml,
    }
}

/// Normalize backend-config text of unknown format. Never fails.
///
/// YAML mappings are converted to HCL; a YAML document with a non-mapping top
/// level is passed through unchanged, as is anything that does not parse.
///
/// ```
/// use tfbackend_core::normalize;
/// let (content, ext) = normalize("bucket: my-bucket\nencrypt: true").into_parts();
/// assert_eq!(content, "bucket = \"my-bucket\"\nencrypt = true");
/// assert_eq!(ext, ".tfbackend");
/// ```
pub fn normalize(text: &str) -> Normalized {
    match probe(text) {
        Probe::NotYaml => Normalized::passthrough(text),
        Probe::Null => Normalized::empty(),
        Probe::Mapping(entries) => converted(&entries),
        Probe::OtherShape(found) => {
            debug!(found, "YAML top level is not a mapping, passing through");
            Normalized::passthrough(text)
        }
    }
}

/// Like [`normalize`], but a YAML document whose top level is neither a
/// mapping nor null is rejected with [`TfBackendError::TopLevelShape`].
pub fn normalize_strict(text: &str) -> Result<Normalized> {
    match probe(text) {
        Probe::NotYaml => Ok(Normalized::passthrough(text)),
        Probe::Null => Ok(Normalized::empty()),
        Probe::Mapping(entries) => Ok(converted(&entries)),
        Probe::OtherShape(found) => Err(TfBackendError::TopLevelShape { found }),
    }
}

/// Convert YAML to HCL with no fallback: YAML errors propagate, a null
/// document yields `""`, and a non-mapping top level is an error.
pub fn yaml_to_hcl(text: &str) -> Result<String> {
    match parse_yaml(text)? {
        ConfigValue::Null => Ok(String::new()),
        ConfigValue::Mapping(entries) => Ok(encode_document(&entries)),
        other => Err(TfBackendError::TopLevelShape {
            found: other.kind(),
        }),
    }
}

fn converted(entries: &[(String, ConfigValue)]) -> Normalized {
    debug!(keys = entries.len(), "converting YAML backend config to HCL");
    Normalized {
        content: encode_document(entries),
        format: SourceFormat::Yaml,
    }
}
