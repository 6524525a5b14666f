//! Build configuration.
//!
//! [`CooccurrenceConfig`] holds options as written (TOML or builder calls);
//! [`CooccurrenceConfig::resolve`] validates them into [`BuildSettings`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::BuildMethod;
use crate::errors::{ConfigError, ConfigResult};
use crate::stopwords::Stopwords;
use crate::token::LabelAttribute;
use crate::token_filter::NodePolicy;

/// Options for one network build.
///
/// ```toml
/// nodes = "lexical"
/// label = "semantic_unit"
/// stopwords = "english"
/// stopwords_dir = "data/stopwords"
/// method = "window"
/// spantype = "paragraph"
/// window = [2, 5]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CooccurrenceConfig {
    /// Admission policy name
    pub nodes: String,
    /// Token attribute used as node label
    pub label: String,
    /// Stoplist name, empty for none
    pub stopwords: String,
    /// Directory stoplists are looked up in
    pub stopwords_dir: PathBuf,
    /// Construction method name
    pub method: String,
    /// Span type for the `textspan` method
    pub spantype: String,
    /// Window widths for the `window` method, in processing order
    pub window: Vec<usize>,
    /// Count each token pair at most once (`window` method)
    pub unique_pairs: bool,
}

impl Default for CooccurrenceConfig {
    fn default() -> Self {
        Self {
            nodes: NodePolicy::default().name().to_string(),
            label: LabelAttribute::default().name().to_string(),
            stopwords: String::new(),
            stopwords_dir: PathBuf::from("data/stopwords"),
            method: BuildMethod::default().name().to_string(),
            spantype: "paragraph".to_string(),
            window: vec![2, 5],
            unique_pairs: false,
        }
    }
}

/// Validated, typed configuration.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub nodes: NodePolicy,
    pub label: LabelAttribute,
    pub stopwords: Stopwords,
    pub method: BuildMethod,
    pub span_type: String,
    pub window: Vec<usize>,
    pub unique_pairs: bool,
}

impl CooccurrenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file. A relative `stopwords_dir` is taken relative
    /// to the file's directory.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if config.stopwords_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.stopwords_dir = parent.join(&config.stopwords_dir);
            }
        }
        Ok(config)
    }

    pub fn with_nodes(mut self, nodes: &str) -> Self {
        self.nodes = nodes.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_stopwords(mut self, name: &str) -> Self {
        self.stopwords = name.to_string();
        self
    }

    pub fn with_stopwords_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stopwords_dir = dir.into();
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn with_span_type(mut self, span_type: &str) -> Self {
        self.spantype = span_type.to_string();
        self
    }

    pub fn with_window(mut self, widths: Vec<usize>) -> Self {
        self.window = widths;
        self
    }

    pub fn with_unique_pairs(mut self, unique: bool) -> Self {
        self.unique_pairs = unique;
        self
    }

    /// Validate every option and load the stoplist.
    ///
    /// Window widths are only checked when the `window` method is selected.
    pub fn resolve(&self) -> ConfigResult<BuildSettings> {
        let nodes: NodePolicy = self.nodes.parse()?;
        let label: LabelAttribute = self.label.parse()?;
        let method: BuildMethod = self.method.parse()?;
        if method == BuildMethod::Window {
            if self.window.is_empty() {
                return Err(ConfigError::EmptyWindow);
            }
            if let Some(&width) = self.window.iter().find(|&&width| width < 2) {
                return Err(ConfigError::WindowTooNarrow(width));
            }
        }
        let stopwords = Stopwords::load(&self.stopwords, &self.stopwords_dir)?;

        Ok(BuildSettings {
            nodes,
            label,
            stopwords,
            method,
            span_type: self.spantype.clone(),
            window: self.window.clone(),
            unique_pairs: self.unique_pairs,
        })
    }
}
