//! Error types for reading documents and writing graphs.

use std::path::PathBuf;

use layered_networks::{DocumentError, UnknownTagset};
use thiserror::Error;

/// Errors while reading an annotated document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document format \"{0}\" (expected json or ron)")]
    UnknownFormat(String),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid RON document: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error(transparent)]
    Tagset(#[from] UnknownTagset),

    #[error("invalid document: {0}")]
    Document(#[from] DocumentError),
}

/// Errors while writing a graph.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format \"{0}\" (expected gexf, json or text)")]
    UnknownFormat(String),

    #[error("failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write graph: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for document loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for graph export.
pub type ExportResult<T> = Result<T, ExportError>;
