//! Error types for entry validation, template resolution, and config loading.
//!
//! Every failure the resolution pipeline can raise is a variant of one closed
//! enum so callers can match on the kind and read the offending key directly.
use crate::entry::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Domain error for records, templates, and config documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrescentError {
    // Schema violations
    #[error("non-standard key \"{key}\"")]
    UnknownKey { key: String },

    #[error("invalid key type for \"{key}\": expected {expected}")]
    TypeMismatch { key: String, expected: ValueKind },

    #[error("missing required key \"{key}\"")]
    MissingRequiredKey { key: String },

    #[error("invalid record \"{name}\": {reason}")]
    InvalidRecord { name: String, reason: String },

    // Merge errors
    #[error("template \"{name}\" does not exist")]
    TemplateNotFound { name: String },

    #[error("template \"{template}\" pattern for \"{key}\" references undefined placeholder \"{placeholder}\"")]
    MissingPlaceholder {
        template: String,
        key: String,
        placeholder: String,
    },

    #[error("template \"{template}\" has a malformed pattern for \"{key}\": {reason}")]
    MalformedPattern {
        template: String,
        key: String,
        reason: String,
    },

    // Config and output errors
    #[error("invalid config file {path:?}: {reason}")]
    InvalidConfigFile { path: PathBuf, reason: String },

    #[error("applications \"{first}\" and \"{second}\" both map to {file_name}")]
    FilenameCollision {
        file_name: String,
        first: String,
        second: String,
    },
}
