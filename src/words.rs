//! Word source for `[WORD]` placeholders
//!
//! External nouns are read from a file and merged with a small set of
//! symbolic tokens that downstream tooling expands per user.

use std::collections::HashSet;
use std::path::Path;

use crate::input::read_lines_or_empty;

/// Noun-like tokens appended to every word pool, after the external words.
pub const NOUN_TOKENS: &[&str] = &["{monthsGerman}", "{seasonsGerman}", "{sn}", "{givenName}"];

/// Ordered, duplicate-free list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load external words from `path` and merge the built-in tokens.
    ///
    /// An unreadable file is not fatal: a warning is logged and the list
    /// holds only the built-in tokens.
    pub fn load(path: &Path) -> Self {
        build_word_list(read_lines_or_empty(path, "nouns"))
    }

    /// Words in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Append [`NOUN_TOKENS`] to `external` and drop repeats, keeping the first
/// occurrence of each word.
pub fn build_word_list<I>(external: I) -> WordList
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    let combined = external
        .into_iter()
        .map(Into::<String>::into)
        .chain(NOUN_TOKENS.iter().map(|s| s.to_string()));

    for word in combined {
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    WordList { words }
}
