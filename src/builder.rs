//! Strategy selection and the build entry point.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::config::CooccurrenceConfig;
use crate::document::Document;
use crate::errors::{ConfigError, ConfigResult};
use crate::graph::Graph;
use crate::text_span::TextSpanGraphBuilder;
use crate::token_filter::TokenFilter;
use crate::window::WindowGraphBuilder;

/// A graph construction strategy.
pub trait NetworkBuilder {
    /// Add this strategy's cooccurrences for `doc` to `graph`.
    fn build_into(&self, doc: &Document, graph: &mut Graph);

    /// Build a fresh graph for `doc`.
    fn build(&self, doc: &Document) -> Graph {
        let mut graph = Graph::new();
        self.build_into(doc, &mut graph);
        graph
    }
}

/// Construction methods selectable by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMethod {
    /// Sliding word windows over the whole token stream
    Window,
    /// Full connection within each sentence
    Sentence,
    /// Full connection within each text span of the configured type
    TextSpan,
}

impl BuildMethod {
    pub fn name(self) -> &'static str {
        match self {
            BuildMethod::Window => "window",
            BuildMethod::Sentence => "sentence",
            BuildMethod::TextSpan => "textspan",
        }
    }
}

impl Default for BuildMethod {
    fn default() -> Self {
        BuildMethod::Window
    }
}

impl FromStr for BuildMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "window" => Ok(BuildMethod::Window),
            "sentence" => Ok(BuildMethod::Sentence),
            "textspan" => Ok(BuildMethod::TextSpan),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for BuildMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The configured strategy, ready to run.
pub enum CooccurrenceBuilder {
    Window(WindowGraphBuilder),
    Span(TextSpanGraphBuilder),
}

impl CooccurrenceBuilder {
    /// Validate `config` and set up the strategy it names.
    ///
    /// Fails on an unknown policy, label, or method, an invalid window list,
    /// or a stoplist that cannot be found.
    pub fn from_config(config: &CooccurrenceConfig) -> ConfigResult<Self> {
        let settings = config.resolve()?;
        let filter = TokenFilter::new(settings.nodes, settings.label, settings.stopwords);
        let builder = match settings.method {
            BuildMethod::Window => CooccurrenceBuilder::Window(
                WindowGraphBuilder::new(filter, settings.window)
                    .with_unique_pairs(settings.unique_pairs),
            ),
            BuildMethod::Sentence => {
                CooccurrenceBuilder::Span(TextSpanGraphBuilder::sentences(filter))
            }
            BuildMethod::TextSpan => {
                CooccurrenceBuilder::Span(TextSpanGraphBuilder::new(filter, settings.span_type))
            }
        };
        Ok(builder)
    }

    pub fn method(&self) -> BuildMethod {
        match self {
            CooccurrenceBuilder::Window(_) => BuildMethod::Window,
            CooccurrenceBuilder::Span(builder) => match builder.scope() {
                crate::text_span::SpanScope::Sentence => BuildMethod::Sentence,
                crate::text_span::SpanScope::TextSpan(_) => BuildMethod::TextSpan,
            },
        }
    }
}

impl NetworkBuilder for CooccurrenceBuilder {
    fn build_into(&self, doc: &Document, graph: &mut Graph) {
        match self {
            CooccurrenceBuilder::Window(builder) => builder.build_into(doc, graph),
            CooccurrenceBuilder::Span(builder) => builder.build_into(doc, graph),
        }
        info!(
            "graph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }
}
