//! # tfbackend-core
//!
//! Normalizes Terraform remote-state backend configurations. Users may write a
//! backend config either as YAML or directly as a `.tfbackend` HCL attribute
//! file; this crate detects which one it got and always hands back HCL.
//!
//! ## Quick start
//!
//! ```rust
//! use tfbackend_core::{normalize, SourceFormat};
//!
//! // YAML → HCL
//! let out = normalize("bucket: my-bucket\nregion: us-east-1");
//! assert_eq!(out.format, SourceFormat::Yaml);
//! assert_eq!(out.content, "bucket = \"my-bucket\"\nregion = \"us-east-1\"");
//!
//! // HCL passes through unchanged
//! let hcl = "bucket = \"my-bucket\"\n";
//! assert_eq!(normalize(hcl).content, hcl);
//! ```
//!
//! ## Modules
//!
//! - [`normalize`](mod@normalize) — format detection, `normalize`, `normalize_strict`, `yaml_to_hcl`
//! - [`decoder`] — YAML text → [`ConfigValue`]
//! - [`encoder`] — [`ConfigValue`] → HCL text
//! - [`loader`] — reading config files and staging `.tfbackend` files
//! - [`error`] — error types
//! - [`types`] — the [`ConfigValue`] model

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod types;

pub use decoder::parse_yaml;
pub use encoder::{encode_document, serialize};
pub use error::{Result, TfBackendError};
pub use loader::{load_backend_config, read_backend_config, stage_backend_config, staged_file_name};
pub use normalize::{
    detect_format, normalize, normalize_strict, yaml_to_hcl, Normalized, SourceFormat,
    BACKEND_EXTENSION,
};
pub use types::ConfigValue;
