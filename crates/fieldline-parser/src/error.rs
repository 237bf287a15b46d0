//! Configuration error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Problems found while building a [`crate::StatementConfig`].
///
/// Parsing itself never fails; these are raised once, at configuration time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("statement format is empty")]
    EmptyFormat,

    #[error("statement format references unknown field type '{name}'")]
    UnknownFieldType { name: String },

    #[error("token rule '{name}' is defined more than once")]
    DuplicateRule { name: String },

    #[error("'{name}' is reserved and cannot be used as a token rule name")]
    ReservedName { name: String },

    #[error("invalid pattern for token rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read grammar file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid grammar file: {0}")]
    Json(#[from] serde_json::Error),
}
