//! Mapping of part-of-speech tagsets onto [`WordClass`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::token::{PosTag, WordClass};

/// Tagsets whose tags can be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagset {
    /// Universal Dependencies UPOS
    Universal,
    /// Penn Treebank
    Penn,
    /// Stuttgart-Tübingen tagset (German)
    Stts,
}

impl Default for Tagset {
    fn default() -> Self {
        Tagset::Universal
    }
}

impl Tagset {
    pub fn name(self) -> &'static str {
        match self {
            Tagset::Universal => "universal",
            Tagset::Penn => "penn",
            Tagset::Stts => "stts",
        }
    }

    /// Build a [`PosTag`] for a raw tag of this tagset.
    pub fn tag(self, tag: &str) -> PosTag {
        PosTag::new(tag, self.classify(tag))
    }

    /// Classify a raw tag. Tags the tagset does not know map to
    /// [`WordClass::Other`].
    pub fn classify(self, tag: &str) -> WordClass {
        match self {
            Tagset::Universal => classify_universal(tag),
            Tagset::Penn => classify_penn(tag),
            Tagset::Stts => classify_stts(tag),
        }
    }
}

impl fmt::Display for Tagset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized tagset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tagset \"{0}\"")]
pub struct UnknownTagset(pub String);

impl FromStr for Tagset {
    type Err = UnknownTagset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "universal" | "ud" | "upos" => Ok(Tagset::Universal),
            "penn" | "ptb" => Ok(Tagset::Penn),
            "stts" => Ok(Tagset::Stts),
            _ => Err(UnknownTagset(s.to_string())),
        }
    }
}

fn classify_universal(tag: &str) -> WordClass {
    match tag.to_ascii_uppercase().as_str() {
        "NOUN" => WordClass::Noun,
        "PROPN" => WordClass::ProperNoun,
        "VERB" => WordClass::Verb,
        "AUX" => WordClass::Auxiliary,
        "ADJ" => WordClass::Adjective,
        "ADV" => WordClass::Adverb,
        "PRON" => WordClass::Pronoun,
        "DET" => WordClass::Determiner,
        "ADP" => WordClass::Adposition,
        "CCONJ" | "SCONJ" | "CONJ" => WordClass::Conjunction,
        "PART" => WordClass::Particle,
        "NUM" => WordClass::Numeral,
        "INTJ" => WordClass::Interjection,
        "PUNCT" => WordClass::Punctuation,
        _ => WordClass::Other,
    }
}

fn classify_penn(tag: &str) -> WordClass {
    match tag {
        "NN" | "NNS" => WordClass::Noun,
        "NNP" | "NNPS" => WordClass::ProperNoun,
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => WordClass::Verb,
        "MD" => WordClass::Auxiliary,
        "JJ" | "JJR" | "JJS" => WordClass::Adjective,
        "RB" | "RBR" | "RBS" | "WRB" => WordClass::Adverb,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => WordClass::Pronoun,
        "DT" | "PDT" | "WDT" => WordClass::Determiner,
        "IN" => WordClass::Adposition,
        "CC" => WordClass::Conjunction,
        "TO" | "RP" | "POS" => WordClass::Particle,
        "CD" => WordClass::Numeral,
        "UH" => WordClass::Interjection,
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "(" | ")" | "#" | "$" | "HYPH"
        | "NFP" => WordClass::Punctuation,
        _ => WordClass::Other,
    }
}

fn classify_stts(tag: &str) -> WordClass {
    match tag {
        "NN" => WordClass::Noun,
        "NE" => WordClass::ProperNoun,
        "ADJA" | "ADJD" => WordClass::Adjective,
        "ADV" | "PAV" | "PROAV" | "PWAV" => WordClass::Adverb,
        "ART" => WordClass::Determiner,
        "APPR" | "APPRART" | "APPO" | "APZR" => WordClass::Adposition,
        "KOUI" | "KOUS" | "KON" | "KOKOM" => WordClass::Conjunction,
        "CARD" => WordClass::Numeral,
        "ITJ" => WordClass::Interjection,
        "$," | "$." | "$(" => WordClass::Punctuation,
        t if t.starts_with("VV") => WordClass::Verb,
        t if t.starts_with("VA") || t.starts_with("VM") => WordClass::Auxiliary,
        t if t.starts_with("PTK") => WordClass::Particle,
        t if t.starts_with('P') => WordClass::Pronoun,
        _ => WordClass::Other,
    }
}
