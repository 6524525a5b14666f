//! Annotated document input.
//!
//! Documents are plain serde structures in JSON or RON:
//!
//! ```json
//! {
//!   "tagset": "penn",
//!   "tokens": [
//!     {"id": "t1", "text": "Ada", "postag": "NNP",
//!      "named_entity": {"class": "PER", "tokens": ["t1"]}},
//!     {"id": "t2", "text": "wrote", "lemma": "write", "postag": "VBD"},
//!     {"id": "t3", "text": "she", "postag": "PRP", "reference": ["t1"]}
//!   ],
//!   "sentences": [["t1", "t2", "t3"]],
//!   "textspans": [{"type": "paragraph", "tokens": ["t1", "t2", "t3"]}]
//! }
//! ```
//!
//! Only `tokens` is required. Without a `tagset`, tags are read as Universal
//! Dependencies UPOS.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use layered_networks::{
    Document, EntityClass, NamedEntity, Reference, Sentence, Tagset, TextSpan, Token, TokenId,
};
use serde::Deserialize;

use crate::errors::{LoadError, LoadResult};

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Ron,
}

impl DocumentFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for DocumentFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "ron" => Ok(DocumentFormat::Ron),
            _ => Err(LoadError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Ron => f.write_str("ron"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    tagset: Option<String>,
    tokens: Vec<RawToken>,
    #[serde(default)]
    sentences: Vec<Vec<String>>,
    #[serde(default)]
    textspans: Vec<RawTextSpan>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
    id: String,
    text: String,
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default)]
    semantic_unit: Option<String>,
    postag: String,
    #[serde(default)]
    named_entity: Option<RawEntity>,
    #[serde(default)]
    reference: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    class: String,
    tokens: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTextSpan {
    #[serde(rename = "type", alias = "span_type")]
    span_type: String,
    tokens: Vec<String>,
}

fn token_ids(ids: Vec<String>) -> Vec<TokenId> {
    ids.into_iter().map(TokenId).collect()
}

impl RawDocument {
    fn into_document(self) -> LoadResult<Document> {
        let tagset: Tagset = match &self.tagset {
            Some(name) => name.parse()?,
            None => Tagset::default(),
        };

        let tokens = self
            .tokens
            .into_iter()
            .map(|raw| Token {
                id: TokenId(raw.id),
                text: raw.text,
                lemma: raw.lemma,
                semantic_unit: raw.semantic_unit,
                postag: tagset.tag(&raw.postag),
                named_entity: raw.named_entity.map(|entity| {
                    NamedEntity::new(EntityClass::parse(&entity.class), token_ids(entity.tokens))
                }),
                reference: raw.reference.map(|ids| Reference::new(token_ids(ids))),
            })
            .collect();

        let sentences = self
            .sentences
            .into_iter()
            .map(|ids| Sentence::new(token_ids(ids)))
            .collect();
        let spans = self
            .textspans
            .into_iter()
            .map(|span| TextSpan::new(span.span_type, token_ids(span.tokens)))
            .collect();

        Ok(Document::new(tokens)?
            .with_sentences(sentences)?
            .with_text_spans(spans)?)
    }
}

/// Parse a document from a string.
pub fn parse_document(text: &str, format: DocumentFormat) -> LoadResult<Document> {
    let raw: RawDocument = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Ron => ron::from_str(text)?,
    };
    raw.into_document()
}

/// Load a document, picking the format from the file extension.
pub fn load_document(path: &Path) -> LoadResult<Document> {
    let format = DocumentFormat::from_path(path)?;
    load_document_as(path, format)
}

/// Load a document in an explicit format.
pub fn load_document_as(path: &Path, format: DocumentFormat) -> LoadResult<Document> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_networks::{LabelAttribute, WordClass};

    #[test]
    fn parse_minimal_json() {
        let doc = parse_document(
            r#"{"tokens": [{"id": "t1", "text": "cats", "lemma": "cat", "postag": "NOUN"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        let token = &doc.tokens()[0];
        assert_eq!(token.postag.class, WordClass::Noun);
        assert_eq!(token.label(LabelAttribute::SemanticUnit), "cat");
        assert!(doc.sentences().is_empty());
    }

    #[test]
    fn parse_annotations_with_tagset() {
        let doc = parse_document(
            r#"{
                "tagset": "stts",
                "tokens": [
                    {"id": "t1", "text": "Ada", "postag": "NE",
                     "named_entity": {"class": "PER", "tokens": ["t1"]}},
                    {"id": "t2", "text": "sie", "postag": "PPER", "reference": ["t1"]}
                ],
                "textspans": [{"type": "paragraph", "tokens": ["t1", "t2"]}]
            }"#,
            DocumentFormat::Json,
        )
        .unwrap();
        let ada = &doc.tokens()[0];
        let sie = &doc.tokens()[1];
        assert_eq!(ada.postag.class, WordClass::ProperNoun);
        assert_eq!(ada.named_entity.as_ref().unwrap().class, EntityClass::Person);
        assert_eq!(sie.postag.class, WordClass::Pronoun);
        assert_eq!(sie.reference.as_ref().unwrap().tokens, vec![TokenId::from("t1")]);
        assert_eq!(doc.spans_of_type("paragraph").count(), 1);
    }

    #[test]
    fn parse_ron() {
        let doc = parse_document(
            r#"(
                tagset: Some("penn"),
                tokens: [
                    (id: "t1", text: "The", postag: "DT"),
                    (id: "t2", text: "cat", postag: "NN"),
                ],
                sentences: [["t1", "t2"]],
                textspans: [(span_type: "paragraph", tokens: ["t1", "t2"])],
            )"#,
            DocumentFormat::Ron,
        )
        .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.tokens()[0].postag.class, WordClass::Determiner);
        assert_eq!(doc.sentences().len(), 1);
        assert_eq!(doc.spans_of_type("paragraph").count(), 1);
    }

    #[test]
    fn unknown_tagset_is_an_error() {
        let err = parse_document(
            r#"{"tagset": "brown", "tokens": []}"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown tagset \"brown\"");
    }

    #[test]
    fn dangling_sentence_member_is_an_error() {
        let err = parse_document(
            r#"{"tokens": [{"id": "t1", "text": "a", "postag": "X"}], "sentences": [["t2"]]}"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Document(_)));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/doc.JSON")).unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("doc.ron")).unwrap(), DocumentFormat::Ron);
        assert!(DocumentFormat::from_path(Path::new("doc.xml")).is_err());
        assert!(DocumentFormat::from_path(Path::new("doc")).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_document(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
