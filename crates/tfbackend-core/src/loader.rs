//! Reading backend-config files and staging the normalized result.
//!
//! The orchestration layer never blocks a pipeline on an unreadable backend
//! config: [`load_backend_config`] substitutes empty content and logs a
//! warning. [`read_backend_config`] is the strict counterpart.

use crate::error::{Result, TfBackendError};
use crate::normalize::{normalize, normalize_strict, Normalized, BACKEND_EXTENSION};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read and normalize a backend-config file. I/O failures yield empty content.
pub fn load_backend_config(path: impl AsRef<Path>) -> Normalized {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => normalize(&text),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "could not read backend config, using empty content"
            );
            Normalized::empty()
        }
    }
}

/// Read and strictly normalize a backend-config file.
pub fn read_backend_config(path: impl AsRef<Path>) -> Result<Normalized> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TfBackendError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    normalize_strict(&text)
}

/// File name a staged backend config is written under: `<stem>.tfbackend`.
pub fn staged_file_name(stem: &str) -> String {
    format!("{stem}{BACKEND_EXTENSION}")
}

/// Write normalized content to `dir/<stem>.tfbackend`, creating `dir` if
/// needed, and return the written path.
pub fn stage_backend_config(
    normalized: &Normalized,
    dir: impl AsRef<Path>,
    stem: &str,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| TfBackendError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(staged_file_name(stem));
    fs::write(&path, &normalized.content).map_err(|source| TfBackendError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), format = %normalized.format, "staged backend config");
    Ok(path)
}
