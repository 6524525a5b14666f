//! Stoplists: newline-delimited terms that are never admitted as nodes.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::errors::{ConfigError, ConfigResult};

/// A set of terms matched exactly and case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    terms: HashSet<String>,
}

impl Stopwords {
    /// Parse a stoplist. One term per line, surrounding whitespace trimmed,
    /// blank lines ignored.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Load the stoplist called `name` from `dir`.
    ///
    /// An empty name yields an empty stoplist.
    pub fn load(name: &str, dir: &Path) -> ConfigResult<Self> {
        if name.is_empty() {
            return Ok(Self::default());
        }
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::MissingStoplist {
                name: name.to_string(),
                path,
            }),
            Err(source) => Err(ConfigError::Stoplist { path, source }),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}
