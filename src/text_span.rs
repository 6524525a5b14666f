//! Span-based cooccurrence networks.
//!
//! Within a span (a paragraph, or a sentence) every admitted term is
//! connected to every other admitted term. Spans accumulate into one graph,
//! so an edge's weight is the number of spans in which both labels were
//! admitted. Nodes remember every token that contributed to them.

use std::collections::HashSet;

use tracing::debug;

use crate::builder::NetworkBuilder;
use crate::document::Document;
use crate::graph::{Graph, NodeId};
use crate::token::TokenId;
use crate::token_filter::TokenFilter;

/// Which partition of the document counts as a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanScope {
    /// Text spans of the given type, e.g. `"paragraph"`
    TextSpan(String),
    /// The sentence layer
    Sentence,
}

pub struct TextSpanGraphBuilder {
    filter: TokenFilter,
    scope: SpanScope,
}

impl TextSpanGraphBuilder {
    /// Connect terms within text spans of `span_type`.
    pub fn new(filter: TokenFilter, span_type: impl Into<String>) -> Self {
        Self {
            filter,
            scope: SpanScope::TextSpan(span_type.into()),
        }
    }

    /// Connect terms within sentences.
    pub fn sentences(filter: TokenFilter) -> Self {
        Self {
            filter,
            scope: SpanScope::Sentence,
        }
    }

    pub fn scope(&self) -> &SpanScope {
        &self.scope
    }

    /// Add one span's cooccurrences to `graph`.
    ///
    /// Tokens are deduplicated by id, then by node: two tokens sharing a
    /// label are one term, so a label pair counts once per span and never
    /// forms a loop.
    pub fn connect_span(&self, doc: &Document, ids: &[TokenId], graph: &mut Graph) {
        let mut seen_tokens = HashSet::new();
        let mut nodes: Vec<NodeId> = Vec::new();
        for token in doc.resolve(ids) {
            if !seen_tokens.insert(&token.id) || !self.filter.admits(doc, token) {
                continue;
            }
            let label = self.filter.label(token);
            if label.is_empty() {
                continue;
            }
            let node = graph.find_or_add_node(label);
            graph.attach_token(node, &token.id);
            if !nodes.contains(&node) {
                nodes.push(node);
            }
        }
        debug!("using {} tokens, {} terms", seen_tokens.len(), nodes.len());

        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                graph.increment_edge(a, b);
            }
        }
    }
}

impl NetworkBuilder for TextSpanGraphBuilder {
    fn build_into(&self, doc: &Document, graph: &mut Graph) {
        let spans: Vec<&[TokenId]> = match &self.scope {
            SpanScope::TextSpan(span_type) => doc
                .spans_of_type(span_type)
                .map(|span| span.tokens.as_slice())
                .collect(),
            SpanScope::Sentence => doc
                .sentences()
                .iter()
                .map(|sentence| sentence.tokens.as_slice())
                .collect(),
        };
        let n = spans.len();
        for (i, ids) in spans.into_iter().enumerate() {
            debug!("creating network for span {}/{}", i + 1, n);
            self.connect_span(doc, ids, graph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::*;
    use crate::{LabelAttribute, NodePolicy, Sentence, Stopwords};

    fn filter() -> TokenFilter {
        TokenFilter::new(NodePolicy::NonClosed, LabelAttribute::Lemma, Stopwords::default())
    }

    #[test]
    fn repeated_token_ids_count_once() {
        let doc = doc(vec![noun("t1", "A"), noun("t2", "B")]);
        let mut graph = Graph::new();
        let builder = TextSpanGraphBuilder::new(filter(), "paragraph");
        builder.connect_span(&doc, &["t1".into(), "t2".into(), "t1".into()], &mut graph);
        assert_eq!(graph.weight("A", "B"), 1);
        assert_eq!(graph.find_node("A").unwrap().tokens.len(), 1);
    }

    #[test]
    fn same_label_tokens_share_a_node_without_looping() {
        let doc = doc(vec![
            noun("t1", "cats").with_lemma("cat"),
            noun("t2", "cat"),
            noun("t3", "mat"),
        ]);
        let mut graph = Graph::new();
        let builder = TextSpanGraphBuilder::new(filter(), "paragraph");
        builder.connect_span(&doc, &["t1".into(), "t2".into(), "t3".into()], &mut graph);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("cat", "mat"), 1);
        assert!(graph.edges().iter().all(|edge| edge.source != edge.target));
        let cat: Vec<_> = graph.find_node("cat").unwrap().tokens.iter().map(|t| t.as_str()).collect();
        assert_eq!(cat, vec!["t1", "t2"]);
    }

    #[test]
    fn sentence_scope_uses_sentence_layer() {
        let doc = doc(vec![noun("t1", "A"), noun("t2", "B"), noun("t3", "C")])
            .with_sentences(vec![
                Sentence::new(vec!["t1".into(), "t2".into()]),
                Sentence::new(vec!["t3".into()]),
            ])
            .unwrap()
            .with_text_spans(vec![span("paragraph", &["t1", "t2", "t3"])])
            .unwrap();

        let by_sentence = TextSpanGraphBuilder::sentences(filter()).build(&doc);
        assert_eq!(by_sentence.edge_count(), 1);
        assert_eq!(by_sentence.weight("A", "B"), 1);

        let by_paragraph = TextSpanGraphBuilder::new(filter(), "paragraph").build(&doc);
        assert_eq!(by_paragraph.edge_count(), 3);
    }

    #[test]
    fn other_span_types_are_ignored() {
        let doc = doc(vec![noun("t1", "A"), noun("t2", "B")])
            .with_text_spans(vec![span("heading", &["t1", "t2"])])
            .unwrap();
        let graph = TextSpanGraphBuilder::new(filter(), "paragraph").build(&doc);
        assert!(graph.is_empty());
    }
}
