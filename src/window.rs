//! Sliding word-window cooccurrence networks.
//!
//! Two admitted tokens cooccur when they fall inside the same window of `w`
//! consecutive admitted tokens. Every configured width is a separate pass
//! over the same graph, in the configured order, so a pair's weight is the
//! number of (window, width) occurrences it was seen in.
//!
//! The method follows Paranyushkin (2011), "Identifying the Pathways for
//! Meaning Circulation using Text Network Analysis", Nodus Labs.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::builder::NetworkBuilder;
use crate::document::Document;
use crate::graph::Graph;
use crate::token::{Token, TokenId};
use crate::token_filter::TokenFilter;

/// Token pairs already counted during one build.
///
/// Only used when pair uniqueness is requested; owned by the build and
/// dropped with it.
#[derive(Debug, Default)]
pub struct PairLedger {
    seen: HashSet<(TokenId, TokenId)>,
}

impl PairLedger {
    /// Record a pair. Returns `false` if it was recorded before.
    pub fn insert(&mut self, a: &Token, b: &Token) -> bool {
        self.seen.insert((a.id.clone(), b.id.clone()))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub struct WindowGraphBuilder {
    filter: TokenFilter,
    widths: Vec<usize>,
    unique_pairs: bool,
}

impl WindowGraphBuilder {
    /// `widths` are processed in the given order.
    pub fn new(filter: TokenFilter, widths: Vec<usize>) -> Self {
        Self {
            filter,
            widths,
            unique_pairs: false,
        }
    }

    /// Count each token pair at most once over the whole build.
    pub fn with_unique_pairs(mut self, unique: bool) -> Self {
        self.unique_pairs = unique;
        self
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Tokens that take part in the windows, in document order.
    ///
    /// Besides passing the filter, a token needs a non-empty label, and of a
    /// multi-token entity mention only the first token is kept.
    pub fn admitted_tokens<'d>(&self, doc: &'d Document) -> Vec<&'d Token> {
        doc.tokens()
            .iter()
            .filter(|token| self.filter.admits(doc, token))
            .filter(|token| !self.filter.label(token).is_empty())
            .filter(|token| token.opens_entity())
            .collect()
    }

    /// One pass at a single width.
    pub fn run_pass(
        &self,
        tokens: &[&Token],
        width: usize,
        graph: &mut Graph,
        mut ledger: Option<&mut PairLedger>,
    ) {
        if width < 2 {
            return;
        }
        for window in tokens.windows(width) {
            for (i, a) in window.iter().enumerate() {
                for b in &window[i + 1..] {
                    if let Some(ledger) = ledger.as_deref_mut() {
                        if !ledger.insert(a, b) {
                            debug!("pair {}/{} already counted, skipping", a.id, b.id);
                            continue;
                        }
                    }
                    graph.add_or_increment_edge(self.filter.label(a), self.filter.label(b));
                }
            }
        }
    }
}

impl NetworkBuilder for WindowGraphBuilder {
    fn build_into(&self, doc: &Document, graph: &mut Graph) {
        let tokens = self.admitted_tokens(doc);
        let mut ledger = if self.unique_pairs {
            Some(PairLedger::default())
        } else {
            None
        };
        for &width in &self.widths {
            info!("building network with window {}", width);
            self.run_pass(&tokens, width, graph, ledger.as_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::*;
    use crate::{LabelAttribute, NodePolicy, Stopwords};

    fn builder(widths: Vec<usize>) -> WindowGraphBuilder {
        let filter = TokenFilter::new(NodePolicy::NonClosed, LabelAttribute::Text, Stopwords::default());
        WindowGraphBuilder::new(filter, widths)
    }

    fn labels(tokens: &[&Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn admitted_tokens_skip_entity_continuations() {
        let doc = doc(vec![
            noun("t1", "Ada").with_named_entity(person(&["t1", "t2"])),
            noun("t2", "Lovelace").with_named_entity(person(&["t1", "t2"])),
            verb("t3", "wrote"),
            noun("t4", ""),
        ]);
        let builder = builder(vec![2]);
        assert_eq!(labels(&builder.admitted_tokens(&doc)), vec!["Ada", "wrote"]);
    }

    #[test]
    fn sequence_shorter_than_window_adds_nothing() {
        let doc = doc(vec![noun("t1", "cat"), noun("t2", "mat")]);
        let graph = builder(vec![3]).build(&doc);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unique_pairs_count_token_pairs_once() {
        let doc = cat_sat_on_the_mat();
        let graph = builder(vec![2, 3]).with_unique_pairs(true).build(&doc);
        assert_eq!(graph.weight("cat", "sat"), 1);
        assert_eq!(graph.weight("sat", "mat"), 1);
        assert_eq!(graph.weight("cat", "mat"), 1);
    }

    #[test]
    fn ledger_is_scoped_to_one_build() {
        let doc = cat_sat_on_the_mat();
        let builder = builder(vec![2]).with_unique_pairs(true);
        let first = builder.build(&doc);
        let second = builder.build(&doc);
        assert_eq!(first.weight("cat", "sat"), 1);
        assert_eq!(second.weight("cat", "sat"), 1);
    }

    #[test]
    fn repeated_labels_never_loop() {
        let doc = doc(vec![noun("t1", "cat"), noun("t2", "cat"), noun("t3", "mat")]);
        let graph = builder(vec![2]).build(&doc);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("cat", "mat"), 1);
    }
}
