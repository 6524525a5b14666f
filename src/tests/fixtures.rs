//! Token constructors shared by the unit and scenario tests.

use crate::{Document, EntityClass, NamedEntity, PosTag, Reference, TextSpan, Token, WordClass};

fn token(id: &str, text: &str, tag: &str, class: WordClass) -> Token {
    Token::new(id, text, PosTag::new(tag, class))
}

pub fn noun(id: &str, text: &str) -> Token {
    token(id, text, "NN", WordClass::Noun)
}

pub fn verb(id: &str, text: &str) -> Token {
    token(id, text, "VB", WordClass::Verb)
}

pub fn aux(id: &str, text: &str) -> Token {
    token(id, text, "MD", WordClass::Auxiliary)
}

pub fn adverb(id: &str, text: &str) -> Token {
    token(id, text, "RB", WordClass::Adverb)
}

pub fn det(id: &str, text: &str) -> Token {
    token(id, text, "DT", WordClass::Determiner)
}

pub fn prep(id: &str, text: &str) -> Token {
    token(id, text, "IN", WordClass::Adposition)
}

pub fn pronoun(id: &str, text: &str) -> Token {
    token(id, text, "PRP", WordClass::Pronoun)
}

pub fn punct(id: &str, text: &str) -> Token {
    token(id, text, ".", WordClass::Punctuation)
}

fn ids(ids: &[&str]) -> Vec<crate::TokenId> {
    ids.iter().map(|&id| id.into()).collect()
}

pub fn person(tokens: &[&str]) -> NamedEntity {
    NamedEntity::new(EntityClass::Person, ids(tokens))
}

pub fn org(tokens: &[&str]) -> NamedEntity {
    NamedEntity::new(EntityClass::Organization, ids(tokens))
}

pub fn location(tokens: &[&str]) -> NamedEntity {
    NamedEntity::new(EntityClass::Location, ids(tokens))
}

pub fn refers_to(tokens: &[&str]) -> Reference {
    Reference::new(ids(tokens))
}

pub fn doc(tokens: Vec<Token>) -> Document {
    Document::new(tokens).unwrap()
}

pub fn span(span_type: &str, tokens: &[&str]) -> TextSpan {
    TextSpan::new(span_type, ids(tokens))
}

/// "the cat sat on the mat", tagged.
pub fn cat_sat_on_the_mat() -> Document {
    doc(vec![
        det("t1", "the"),
        noun("t2", "cat"),
        verb("t3", "sat"),
        prep("t4", "on"),
        det("t5", "the"),
        noun("t6", "mat"),
    ])
}
