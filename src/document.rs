//! The annotated input a network is built from.

use std::collections::HashMap;

use crate::errors::{DocumentError, DocumentResult};
use crate::token::{Token, TokenId};

/// A sentence as an ordered list of token ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<TokenId>,
}

impl Sentence {
    pub fn new(tokens: Vec<TokenId>) -> Self {
        Self { tokens }
    }
}

/// A typed subdivision of the text (paragraph, section, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub span_type: String,
    pub tokens: Vec<TokenId>,
}

impl TextSpan {
    pub fn new(span_type: impl Into<String>, tokens: Vec<TokenId>) -> Self {
        Self {
            span_type: span_type.into(),
            tokens,
        }
    }
}

/// Tokens in document order plus the sentence and text structure layers.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tokens: Vec<Token>,
    index: HashMap<TokenId, usize>,
    sentences: Vec<Sentence>,
    text_spans: Vec<TextSpan>,
}

impl Document {
    /// Create a document from tokens in reading order.
    pub fn new(tokens: Vec<Token>) -> DocumentResult<Self> {
        let mut index = HashMap::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            if index.insert(token.id.clone(), idx).is_some() {
                return Err(DocumentError::DuplicateToken(token.id.clone()));
            }
        }
        Ok(Self {
            tokens,
            index,
            sentences: Vec::new(),
            text_spans: Vec::new(),
        })
    }

    /// Attach the sentence layer.
    pub fn with_sentences(mut self, sentences: Vec<Sentence>) -> DocumentResult<Self> {
        for (idx, sentence) in sentences.iter().enumerate() {
            self.check_members(&sentence.tokens, || format!("sentence {}", idx))?;
        }
        self.sentences = sentences;
        Ok(self)
    }

    /// Attach the text structure layer.
    pub fn with_text_spans(mut self, spans: Vec<TextSpan>) -> DocumentResult<Self> {
        for (idx, span) in spans.iter().enumerate() {
            self.check_members(&span.tokens, || {
                format!("textspan {} ({})", idx, span.span_type)
            })?;
        }
        self.text_spans = spans;
        Ok(self)
    }

    fn check_members(
        &self,
        ids: &[TokenId],
        context: impl Fn() -> String,
    ) -> DocumentResult<()> {
        match ids.iter().find(|id| !self.index.contains_key(*id)) {
            Some(id) => Err(DocumentError::UnknownToken {
                id: id.clone(),
                context: context(),
            }),
            None => Ok(()),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: &TokenId) -> Option<&Token> {
        self.index.get(id).map(|&idx| &self.tokens[idx])
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn text_spans(&self) -> &[TextSpan] {
        &self.text_spans
    }

    /// Text spans of one type, in document order.
    pub fn spans_of_type<'a>(&'a self, span_type: &'a str) -> impl Iterator<Item = &'a TextSpan> {
        self.text_spans
            .iter()
            .filter(move |span| span.span_type == span_type)
    }

    /// Tokens for a list of ids. Ids that are not part of the document are
    /// skipped.
    pub fn resolve<'a>(&'a self, ids: &'a [TokenId]) -> impl Iterator<Item = &'a Token> + 'a {
        ids.iter().filter_map(move |id| self.token(id))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
