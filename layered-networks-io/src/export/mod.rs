//! Graph export formats.

mod gexf;
mod json;

use std::fmt;
use std::str::FromStr;

use layered_networks::Graph;

use crate::errors::{ExportError, ExportResult};

pub use gexf::{to_gexf_string, write_gexf};
pub use json::{to_json_string, write_json};

/// Output formats for a finished graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// GEXF 1.2, for Gephi and similar tools
    Gexf,
    Json,
    /// The plain-text listing from [`Graph::display`]
    Text,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Gexf
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gexf" => Ok(ExportFormat::Gexf),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Gexf => "gexf",
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        })
    }
}

/// Render `graph` in the given format.
pub fn export(graph: &Graph, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Gexf => Ok(to_gexf_string(graph)),
        ExportFormat::Json => to_json_string(graph),
        ExportFormat::Text => Ok(graph.display().with_tokens(true).to_string()),
    }
}
