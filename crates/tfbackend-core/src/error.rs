//! Error types for backend-config parsing, conversion and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while normalizing a backend configuration.
#[derive(Error, Debug)]
pub enum TfBackendError {
    /// The input was not valid YAML (or held more than one document).
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// The input parsed as YAML but uses a construct with no `.tfbackend`
    /// equivalent (custom tags, sequence or mapping keys).
    #[error("unsupported YAML: {message}")]
    UnsupportedYaml { message: String },

    /// The document parsed, but its top level is not a mapping.
    #[error("backend config must be a mapping (dictionary) at the top level, found {found}")]
    TopLevelShape { found: &'static str },

    /// The backend-config file could not be read or the staged file could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TfBackendError {
    /// True when YAML parsing failed because a mapping repeats a key.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            TfBackendError::YamlParse(err) => err.to_string().contains("duplicate entry"),
            _ => false,
        }
    }
}

/// Convenience alias used throughout tfbackend-core.
pub type Result<T> = std::result::Result<T, TfBackendError>;
