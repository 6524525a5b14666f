#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Input and output for layered-networks.
//!
//! ## Modules
//!
//! - [`input`] - Annotated documents from JSON or RON
//! - [`export`] - Graphs to GEXF, JSON or plain text
//! - [`errors`] - Error types for loading and export

pub mod errors;
pub mod export;
pub mod input;

pub use errors::{ExportError, ExportResult, LoadError, LoadResult};
pub use export::{export, to_gexf_string, to_json_string, write_gexf, write_json, ExportFormat};
pub use input::{load_document, load_document_as, parse_document, DocumentFormat};

#[cfg(test)]
mod tests;
