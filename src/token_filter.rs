//! Token admission: which tokens may become (or extend) a graph node.
//!
//! A [`TokenFilter`] combines a [`NodePolicy`], the [`LabelAttribute`] used
//! for node identity, and a [`Stopwords`] list. Every policy is a pure
//! predicate; the stoplist is applied last as a veto, so a stopword is never
//! admitted whatever the policy says.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::document::Document;
use crate::errors::ConfigError;
use crate::stopwords::Stopwords;
use crate::token::{LabelAttribute, NamedEntity, Token};

/// How many coreference hops the entity tests follow.
const REFERENCE_DEPTH: usize = 1;

/// Admission policies, from the most permissive to the most selective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodePolicy {
    /// Everything not on the stoplist
    Stopwords,
    /// Everything but punctuation
    Full,
    /// Open-class words
    NonClosed,
    /// Open-class words except adverbs, plus closed-class tokens that carry
    /// an entity or coreference annotation
    Lexical,
    /// `Lexical` plus all verbs
    Semantic,
    /// `Semantic` minus verbs
    Concept,
    /// Nouns and entities
    Noun,
    /// Named entities, directly or through one coreference link
    Entity,
    /// Persons and organizations, directly or through one coreference link
    Actor,
}

static POLICIES: Lazy<HashMap<&'static str, NodePolicy>> = Lazy::new(|| {
    NodePolicy::ALL
        .iter()
        .map(|&policy| (policy.name(), policy))
        .collect()
});

impl NodePolicy {
    pub const ALL: [NodePolicy; 9] = [
        NodePolicy::Stopwords,
        NodePolicy::Full,
        NodePolicy::NonClosed,
        NodePolicy::Lexical,
        NodePolicy::Semantic,
        NodePolicy::Concept,
        NodePolicy::Noun,
        NodePolicy::Entity,
        NodePolicy::Actor,
    ];

    /// The configuration name of this policy.
    pub fn name(self) -> &'static str {
        match self {
            NodePolicy::Stopwords => "stopwords",
            NodePolicy::Full => "full",
            NodePolicy::NonClosed => "nonclosed",
            NodePolicy::Lexical => "lexical",
            NodePolicy::Semantic => "semantic",
            NodePolicy::Concept => "concept",
            NodePolicy::Noun => "noun",
            NodePolicy::Entity => "entity",
            NodePolicy::Actor => "actor",
        }
    }
}

impl Default for NodePolicy {
    fn default() -> Self {
        NodePolicy::Lexical
    }
}

impl FromStr for NodePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        POLICIES
            .get(s)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for NodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured admission test.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    policy: NodePolicy,
    label: LabelAttribute,
    stopwords: Stopwords,
}

impl TokenFilter {
    pub fn new(policy: NodePolicy, label: LabelAttribute, stopwords: Stopwords) -> Self {
        Self {
            policy,
            label,
            stopwords,
        }
    }

    pub fn policy(&self) -> NodePolicy {
        self.policy
    }

    pub fn label_attribute(&self) -> LabelAttribute {
        self.label
    }

    /// The node label this filter assigns to `token`.
    pub fn label<'t>(&self, token: &'t Token) -> &'t str {
        token.label(self.label)
    }

    /// Whether `token` may participate in the graph. `doc` resolves
    /// coreference links.
    pub fn admits(&self, doc: &Document, token: &Token) -> bool {
        self.policy_admits(doc, token) && !self.is_stopword(token)
    }

    fn policy_admits(&self, doc: &Document, token: &Token) -> bool {
        let postag = &token.postag;
        match self.policy {
            NodePolicy::Stopwords => true,
            NodePolicy::Full => !postag.is_punctuation(),
            NodePolicy::NonClosed => !postag.is_closed(),
            NodePolicy::Lexical => Self::lexical(token),
            NodePolicy::Semantic => postag.is_verb() || Self::lexical(token),
            NodePolicy::Concept => !postag.is_verb() && Self::lexical(token),
            NodePolicy::Noun => postag.is_noun() || Self::is_entity(doc, token, REFERENCE_DEPTH),
            NodePolicy::Entity => Self::is_entity(doc, token, REFERENCE_DEPTH),
            NodePolicy::Actor => Self::is_actor(doc, token, REFERENCE_DEPTH),
        }
    }

    fn is_stopword(&self, token: &Token) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(self.label(token))
    }

    fn lexical(token: &Token) -> bool {
        let postag = &token.postag;
        if !postag.is_closed() && !postag.is_adverb() {
            return true;
        }
        token.named_entity.is_some() || token.reference.is_some()
    }

    fn is_entity(doc: &Document, token: &Token, depth: usize) -> bool {
        Self::resolves_to(doc, token, depth, &|_| true)
    }

    fn is_actor(doc: &Document, token: &Token, depth: usize) -> bool {
        Self::resolves_to(doc, token, depth, &|entity| entity.class.is_actor())
    }

    /// True if `token` carries a qualifying entity, or links to a token that
    /// does within `depth` coreference hops.
    fn resolves_to(
        doc: &Document,
        token: &Token,
        depth: usize,
        qualifies: &dyn Fn(&NamedEntity) -> bool,
    ) -> bool {
        if token.named_entity.as_ref().map_or(false, qualifies) {
            return true;
        }
        if depth == 0 {
            return false;
        }
        match &token.reference {
            Some(reference) => doc
                .resolve(&reference.tokens)
                .any(|target| Self::resolves_to(doc, target, depth - 1, qualifies)),
            None => false,
        }
    }
}
