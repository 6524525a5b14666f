//! Annotated tokens as consumed by the graph builders.
//!
//! A [`Token`] carries everything the admission policies look at: a
//! part-of-speech tag reduced to a [`WordClass`], an optional named-entity
//! annotation, and an optional coreference link. Tokens never refer to each
//! other directly; links are expressed as [`TokenId`]s and resolved through a
//! [`Document`](crate::Document).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Identifier of a token within its document (e.g. `"t_12"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        TokenId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        TokenId(id.to_string())
    }
}

/// Coarse word class a part-of-speech tag belongs to.
///
/// Tagsets are mapped onto this enum by [`Tagset::classify`](crate::Tagset::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    ProperNoun,
    Verb,
    /// Auxiliary and modal verbs
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    /// Prepositions and postpositions
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Interjection,
    Punctuation,
    /// Anything the tagset does not classify (foreign words, symbols, ...)
    Other,
}

impl WordClass {
    pub fn is_noun(self) -> bool {
        matches!(self, WordClass::Noun | WordClass::ProperNoun)
    }

    pub fn is_verb(self) -> bool {
        matches!(self, WordClass::Verb | WordClass::Auxiliary)
    }

    pub fn is_adverb(self) -> bool {
        self == WordClass::Adverb
    }

    pub fn is_punctuation(self) -> bool {
        self == WordClass::Punctuation
    }

    /// Closed-class (function) words.
    ///
    /// Punctuation counts as closed: it never forms an open lexical class.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            WordClass::Pronoun
                | WordClass::Determiner
                | WordClass::Adposition
                | WordClass::Conjunction
                | WordClass::Particle
                | WordClass::Auxiliary
                | WordClass::Punctuation
        )
    }
}

/// A part-of-speech tag as annotated, plus the class it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosTag {
    pub tag: String,
    pub class: WordClass,
}

impl PosTag {
    pub fn new(tag: impl Into<String>, class: WordClass) -> Self {
        Self {
            tag: tag.into(),
            class,
        }
    }

    pub fn is_noun(&self) -> bool {
        self.class.is_noun()
    }

    pub fn is_verb(&self) -> bool {
        self.class.is_verb()
    }

    pub fn is_adverb(&self) -> bool {
        self.class.is_adverb()
    }

    pub fn is_punctuation(&self) -> bool {
        self.class.is_punctuation()
    }

    pub fn is_closed(&self) -> bool {
        self.class.is_closed()
    }
}

/// Named-entity category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Person,
    Organization,
    Location,
    Miscellaneous,
    Other(String),
}

impl EntityClass {
    /// Parse CoNLL (`PER`, `ORG`, `LOC`, `MISC`) or long-form category names.
    pub fn parse(class: &str) -> Self {
        match class.trim().to_ascii_uppercase().as_str() {
            "PER" | "PERSON" => EntityClass::Person,
            "ORG" | "ORGANIZATION" | "ORGANISATION" => EntityClass::Organization,
            "LOC" | "LOCATION" | "GPE" => EntityClass::Location,
            "MISC" | "MISCELLANEOUS" => EntityClass::Miscellaneous,
            _ => EntityClass::Other(class.to_string()),
        }
    }

    /// Persons and organizations can act; everything else is a mere entity.
    pub fn is_actor(&self) -> bool {
        matches!(self, EntityClass::Person | EntityClass::Organization)
    }
}

/// A named-entity mention. `tokens` lists every token the mention spans, in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub class: EntityClass,
    pub tokens: Vec<TokenId>,
}

impl NamedEntity {
    pub fn new(class: EntityClass, tokens: Vec<TokenId>) -> Self {
        Self { class, tokens }
    }

    /// The token that opens the mention.
    pub fn first_token(&self) -> Option<&TokenId> {
        self.tokens.first()
    }
}

/// A coreference link back to the tokens of an antecedent mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub tokens: Vec<TokenId>,
}

impl Reference {
    pub fn new(tokens: Vec<TokenId>) -> Self {
        Self { tokens }
    }
}

/// Which token attribute supplies node labels (and stoplist lookups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelAttribute {
    Text,
    Lemma,
    SemanticUnit,
    Id,
}

impl LabelAttribute {
    pub fn name(self) -> &'static str {
        match self {
            LabelAttribute::Text => "text",
            LabelAttribute::Lemma => "lemma",
            LabelAttribute::SemanticUnit => "semantic_unit",
            LabelAttribute::Id => "id",
        }
    }
}

impl Default for LabelAttribute {
    fn default() -> Self {
        LabelAttribute::SemanticUnit
    }
}

impl FromStr for LabelAttribute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LabelAttribute::Text),
            "lemma" => Ok(LabelAttribute::Lemma),
            "semantic_unit" => Ok(LabelAttribute::SemanticUnit),
            "id" => Ok(LabelAttribute::Id),
            other => Err(ConfigError::UnknownLabel(other.to_string())),
        }
    }
}

impl fmt::Display for LabelAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single annotated token. Read-only for everything in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    /// Surface form
    pub text: String,
    pub lemma: Option<String>,
    /// Normalized unit of meaning, when the annotation provides one
    pub semantic_unit: Option<String>,
    pub postag: PosTag,
    pub named_entity: Option<NamedEntity>,
    pub reference: Option<Reference>,
}

impl Token {
    pub fn new(id: impl Into<String>, text: impl Into<String>, postag: PosTag) -> Self {
        Self {
            id: TokenId::new(id),
            text: text.into(),
            lemma: None,
            semantic_unit: None,
            postag,
            named_entity: None,
            reference: None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_semantic_unit(mut self, unit: impl Into<String>) -> Self {
        self.semantic_unit = Some(unit.into());
        self
    }

    pub fn with_named_entity(mut self, entity: NamedEntity) -> Self {
        self.named_entity = Some(entity);
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Value of the given attribute. Lemma falls back to the surface text,
    /// semantic unit falls back to the lemma.
    pub fn label(&self, attribute: LabelAttribute) -> &str {
        match attribute {
            LabelAttribute::Text => &self.text,
            LabelAttribute::Lemma => self.lemma.as_deref().unwrap_or(&self.text),
            LabelAttribute::SemanticUnit => self
                .semantic_unit
                .as_deref()
                .unwrap_or_else(|| self.label(LabelAttribute::Lemma)),
            LabelAttribute::Id => self.id.as_str(),
        }
    }

    /// True unless this token continues a multi-token entity mention it
    /// does not open.
    pub fn opens_entity(&self) -> bool {
        match &self.named_entity {
            Some(entity) => entity.first_token().map_or(true, |first| *first == self.id),
            None => true,
        }
    }
}
