//! Error types for network construction.
//!
//! Everything that can go wrong is detected before a build starts: either the
//! configuration names something that does not exist, or the document is
//! internally inconsistent. Building itself never fails.

use std::path::PathBuf;

use thiserror::Error;

use crate::token::TokenId;

/// Invalid configuration. Aborts the run before any graph is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("node policy \"{0}\" is not supported")]
    UnknownPolicy(String),

    #[error("label attribute \"{0}\" is not supported")]
    UnknownLabel(String),

    #[error("method \"{0}\" is not supported")]
    UnknownMethod(String),

    #[error("window list is empty")]
    EmptyWindow,

    #[error("window width {0} is too narrow, widths must be at least 2")]
    WindowTooNarrow(usize),

    #[error("no stopwords list \"{name}\" (looked in {})", path.display())]
    MissingStoplist { name: String, path: PathBuf },

    #[error("failed to read stopwords list {}: {source}", path.display())]
    Stoplist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Inconsistent document structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("token id \"{0}\" occurs more than once")]
    DuplicateToken(TokenId),

    #[error("{context} refers to unknown token \"{id}\"")]
    UnknownToken { id: TokenId, context: String },
}

/// Result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for document construction.
pub type DocumentResult<T> = Result<T, DocumentError>;
