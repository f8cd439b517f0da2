//! Pattern tokenizer

use regex::Regex;

use super::{Pattern, PlaceholderType, Token};
use crate::error::Result;

const PLACEHOLDER_REGEX: &str = r"\[WORD\]|\[NUMBER\]|\[SPECIAL\]";

/// Splits raw pattern text into literal and placeholder tokens
#[derive(Debug, Clone)]
pub struct PatternTokenizer {
    placeholder: Regex,
}

impl PatternTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            placeholder: Regex::new(PLACEHOLDER_REGEX)?,
        })
    }

    /// Tokenize `pattern` left to right.
    ///
    /// Text that only resembles a marker (`[word]`, `[WORD`, `[FOO]`) stays
    /// literal. An empty pattern becomes a single empty literal.
    pub fn tokenize(&self, pattern: &str) -> Pattern {
        let mut tokens = Vec::new();
        let mut last = 0;

        for m in self.placeholder.find_iter(pattern) {
            if m.start() > last {
                tokens.push(Token::Literal(pattern[last..m.start()].to_string()));
            }
            // The regex only matches the three markers
            if let Some(ty) = PlaceholderType::from_marker(m.as_str()) {
                tokens.push(Token::Placeholder(ty));
            }
            last = m.end();
        }

        if last < pattern.len() || tokens.is_empty() {
            tokens.push(Token::Literal(pattern[last..].to_string()));
        }

        Pattern::new(pattern, tokens)
    }
}
