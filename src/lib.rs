#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Cooccurrence networks from linguistically annotated tokens.
//!
//! Nodes are distinct terms, edges count how often two terms occur close to
//! each other. Part-of-speech tags, named entities and coreference links are
//! expected to be annotated already; this crate only decides which tokens
//! become nodes and how cooccurrence is counted.
//!
//! ## Pipeline
//!
//! 1. A [`TokenFilter`] admits tokens according to a [`NodePolicy`] and an
//!    optional [`Stopwords`] list.
//! 2. A strategy connects admitted tokens:
//!    - [`WindowGraphBuilder`] - sliding word windows of one or more widths
//!    - [`TextSpanGraphBuilder`] - full connection within paragraphs or
//!      sentences
//! 3. The result is a [`Graph`] with unique node labels and weighted,
//!    loop-free, undirected edges.
//!
//! [`CooccurrenceBuilder::from_config`] wires all of this up from a
//! [`CooccurrenceConfig`] and rejects invalid options before anything runs.
//!
//! ## Example
//!
//! ```ignore
//! use layered_networks::{CooccurrenceBuilder, CooccurrenceConfig, NetworkBuilder};
//!
//! let config = CooccurrenceConfig::new().with_nodes("nonclosed").with_window(vec![2, 5]);
//! let graph = CooccurrenceBuilder::from_config(&config)?.build(&document);
//! println!("{}", graph.display());
//! ```

mod builder;
mod config;
mod document;
mod errors;
mod graph;
mod stopwords;
mod tagset;
mod text_span;
mod token;
mod token_filter;
mod window;

pub use builder::{BuildMethod, CooccurrenceBuilder, NetworkBuilder};
pub use config::{BuildSettings, CooccurrenceConfig};
pub use document::{Document, Sentence, TextSpan};
pub use errors::{ConfigError, ConfigResult, DocumentError, DocumentResult};
pub use graph::{Edge, Graph, GraphDisplay, Node, NodeId};
pub use stopwords::Stopwords;
pub use tagset::{Tagset, UnknownTagset};
pub use text_span::{SpanScope, TextSpanGraphBuilder};
pub use token::{
    EntityClass, LabelAttribute, NamedEntity, PosTag, Reference, Token, TokenId, WordClass,
};
pub use token_filter::{NodePolicy, TokenFilter};
pub use window::{PairLedger, WindowGraphBuilder};

#[cfg(test)]
mod tests;
