//! In-memory node/edge table for one build.
//!
//! Nodes are looked up by label, edges by the unordered pair of their
//! endpoints. A node never connects to itself, and there is at most one edge
//! per pair of nodes; repeated cooccurrences increment its weight.

mod display;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::token::TokenId;

pub use display::GraphDisplay;

/// Index of a node within its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A distinct term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// Tokens that contributed to this node. Only filled by span-based
    /// strategies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenId>,
}

/// An undirected, weighted cooccurrence link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl Edge {
    /// True if this edge connects `a` and `b`, in either direction.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Nodes and edges of a cooccurrence network.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    labels: HashMap<String, NodeId>,
    #[serde(skip)]
    pairs: HashMap<(NodeId, NodeId), usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find_node(&self, label: &str) -> Option<&Node> {
        self.labels.get(label).map(|id| &self.nodes[id.0])
    }

    /// Return the node labelled `label`, creating it if necessary.
    pub fn find_or_add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            tokens: Vec::new(),
        });
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Record that `token` contributed to `node`. Ids already recorded are
    /// not repeated.
    pub fn attach_token(&mut self, node: NodeId, token: &TokenId) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            if !node.tokens.contains(token) {
                node.tokens.push(token.clone());
            }
        }
    }

    /// Unordered edge lookup.
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.pairs.get(&pair_key(a, b)).map(|&idx| &self.edges[idx])
    }

    /// Weight of the edge between two labels, 0 if there is none.
    pub fn weight(&self, a: &str, b: &str) -> u32 {
        match (self.labels.get(a), self.labels.get(b)) {
            (Some(&a), Some(&b)) => self.find_edge(a, b).map_or(0, |edge| edge.weight),
            _ => 0,
        }
    }

    /// Count one cooccurrence of two labels.
    ///
    /// Both endpoints are created if needed. If they resolve to the same node
    /// nothing else happens and `None` is returned; otherwise the edge weight
    /// after the increment is returned.
    pub fn add_or_increment_edge(&mut self, a: &str, b: &str) -> Option<u32> {
        let source = self.find_or_add_node(a);
        let target = self.find_or_add_node(b);
        self.increment_edge(source, target)
    }

    /// Like [`add_or_increment_edge`](Self::add_or_increment_edge) for nodes
    /// that already exist.
    pub fn increment_edge(&mut self, source: NodeId, target: NodeId) -> Option<u32> {
        if source == target {
            return None;
        }
        let key = pair_key(source, target);
        let weight = match self.pairs.get(&key).copied() {
            Some(idx) => {
                let edge = &mut self.edges[idx];
                edge.weight += 1;
                edge.weight
            }
            None => {
                self.pairs.insert(key, self.edges.len());
                self.edges.push(Edge {
                    source,
                    target,
                    weight: 1,
                });
                1
            }
        };
        Some(weight)
    }

    /// A [`GraphDisplay`] for this graph.
    pub fn display(&self) -> GraphDisplay<'_> {
        GraphDisplay::new(self)
    }
}
