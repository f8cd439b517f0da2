//! Pattern model: literal text interleaved with typed placeholders
//!
//! A pattern such as `Firma[SPECIAL][NUMBER]` is parsed once into a token
//! list and then resolved against the candidate pools.

mod resolver;
mod tokenizer;

pub use resolver::{ResolvedPattern, ValueResolver, NUMBER_TOKENS, SPECIAL_TOKENS};
pub use tokenizer::PatternTokenizer;

/// Kind of value a placeholder is substituted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderType {
    Word,
    Number,
    Special,
}

impl PlaceholderType {
    pub const ALL: [PlaceholderType; 3] = [Self::Word, Self::Number, Self::Special];

    /// Marker text as it appears in pattern strings
    pub fn marker(&self) -> &'static str {
        match self {
            PlaceholderType::Word => "[WORD]",
            PlaceholderType::Number => "[NUMBER]",
            PlaceholderType::Special => "[SPECIAL]",
        }
    }

    /// Inverse of [`marker`](Self::marker); case-sensitive
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.marker() == marker)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PlaceholderType::Word => 0,
            PlaceholderType::Number => 1,
            PlaceholderType::Special => 2,
        }
    }
}

impl std::fmt::Display for PlaceholderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderType::Word => write!(f, "word"),
            PlaceholderType::Number => write!(f, "number"),
            PlaceholderType::Special => write!(f, "special"),
        }
    }
}

/// One piece of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Placeholder(PlaceholderType),
}

/// A parsed pattern. Tokens keep the order they had in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub(crate) fn new(source: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            source: source.into(),
            tokens,
        }
    }

    /// The raw pattern text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of placeholders of each type, indexed like [`PlaceholderType::ALL`]
    pub fn placeholder_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for token in &self.tokens {
            if let Token::Placeholder(ty) = token {
                counts[ty.index()] += 1;
            }
        }
        counts
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        for ty in PlaceholderType::ALL {
            assert_eq!(PlaceholderType::from_marker(ty.marker()), Some(ty));
        }
        assert_eq!(PlaceholderType::from_marker("[word]"), None);
        assert_eq!(PlaceholderType::from_marker("[NUM]"), None);
    }

    #[test]
    fn test_placeholder_counts() {
        let pattern = Pattern::new(
            "[WORD]x[WORD][SPECIAL]",
            vec![
                Token::Placeholder(PlaceholderType::Word),
                Token::Literal("x".into()),
                Token::Placeholder(PlaceholderType::Word),
                Token::Placeholder(PlaceholderType::Special),
            ],
        );
        assert_eq!(pattern.placeholder_counts(), [2, 0, 1]);
    }
}
