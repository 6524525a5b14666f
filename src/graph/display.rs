//! Plain-text rendering of a cooccurrence graph.
//!
//! Edges are listed heaviest first (ties keep insertion order), with endpoint
//! labels padded to their display width so weights line up.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::{Edge, Graph};

pub struct GraphDisplay<'a> {
    graph: &'a Graph,
    max_edges: usize,
    show_tokens: bool,
}

impl<'a> GraphDisplay<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            max_edges: usize::MAX,
            show_tokens: false,
        }
    }

    /// Show at most `max` edges and elide the rest.
    pub fn with_max_edges(mut self, max: usize) -> Self {
        self.max_edges = max;
        self
    }

    /// List the contributing token ids of each node before the edges.
    pub fn with_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }

    fn label(&self, edge_end: super::NodeId) -> &'a str {
        self.graph
            .node(edge_end)
            .map(|node| node.label.as_str())
            .unwrap_or("?")
    }
}

fn pad(f: &mut fmt::Formatter<'_>, text: &str, width: usize) -> fmt::Result {
    f.write_str(text)?;
    for _ in UnicodeWidthStr::width(text)..width {
        f.write_str(" ")?;
    }
    Ok(())
}

impl<'a> fmt::Display for GraphDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        )?;

        if self.show_tokens {
            let width = self
                .graph
                .nodes()
                .iter()
                .map(|node| UnicodeWidthStr::width(node.label.as_str()))
                .max()
                .unwrap_or(0);
            for node in self.graph.nodes() {
                if node.tokens.is_empty() {
                    continue;
                }
                pad(f, &node.label, width)?;
                let ids: Vec<&str> = node.tokens.iter().map(|t| t.as_str()).collect();
                writeln!(f, "  [{}]", ids.join(", "))?;
            }
        }

        let mut edges: Vec<&Edge> = self.graph.edges().iter().collect();
        edges.sort_by(|a, b| b.weight.cmp(&a.weight));
        let shown = &edges[..edges.len().min(self.max_edges)];

        let source_width = shown
            .iter()
            .map(|edge| UnicodeWidthStr::width(self.label(edge.source)))
            .max()
            .unwrap_or(0);
        let target_width = shown
            .iter()
            .map(|edge| UnicodeWidthStr::width(self.label(edge.target)))
            .max()
            .unwrap_or(0);

        for edge in shown {
            pad(f, self.label(edge.source), source_width)?;
            f.write_str(" ── ")?;
            pad(f, self.label(edge.target), target_width)?;
            writeln!(f, "  {}", edge.weight)?;
        }

        if edges.len() > shown.len() {
            writeln!(f, "... {} more edges elided", edges.len() - shown.len())?;
        }

        Ok(())
    }
}
