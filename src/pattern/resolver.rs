//! Per-token candidate pools

use std::slice;

use super::{Pattern, PlaceholderType, Token};
use crate::words::WordList;

/// Values for `[NUMBER]`, in emission order
pub const NUMBER_TOKENS: &[&str] = &["{YY}", "{YYYY}", "1", "2", "3", "12", "123"];

/// Values for `[SPECIAL]`, in emission order
pub const SPECIAL_TOKENS: &[&str] = &["!", ".", "#", "-", "_"];

/// Maps placeholder types to their candidate pools
#[derive(Debug, Clone)]
pub struct ValueResolver<'w> {
    words: &'w WordList,
    numbers: Vec<String>,
    specials: Vec<String>,
}

impl<'w> ValueResolver<'w> {
    pub fn new(words: &'w WordList) -> Self {
        Self {
            words,
            numbers: NUMBER_TOKENS.iter().map(|s| s.to_string()).collect(),
            specials: SPECIAL_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Candidate pool for one placeholder type
    pub fn pool(&self, ty: PlaceholderType) -> &[String] {
        match ty {
            PlaceholderType::Word => self.words.as_slice(),
            PlaceholderType::Number => &self.numbers,
            PlaceholderType::Special => &self.specials,
        }
    }

    /// Resolve every token of `pattern` to its candidates.
    ///
    /// Literals get a one-element pool holding their text and no constraint.
    pub fn resolve<'a>(&'a self, pattern: &'a Pattern) -> ResolvedPattern<'a> {
        let mut candidates = Vec::with_capacity(pattern.tokens().len());
        let mut constraints = Vec::with_capacity(pattern.tokens().len());

        for token in pattern.tokens() {
            match token {
                Token::Literal(text) => {
                    candidates.push(slice::from_ref(text));
                    constraints.push(None);
                }
                Token::Placeholder(ty) => {
                    candidates.push(self.pool(*ty));
                    constraints.push(Some(*ty));
                }
            }
        }

        ResolvedPattern {
            pattern,
            candidates,
            constraints,
        }
    }
}

/// A pattern paired with the candidate pool of each token
#[derive(Debug, Clone)]
pub struct ResolvedPattern<'a> {
    pattern: &'a Pattern,
    pub(crate) candidates: Vec<&'a [String]>,
    pub(crate) constraints: Vec<Option<PlaceholderType>>,
}

impl<'a> ResolvedPattern<'a> {
    pub fn pattern(&self) -> &'a Pattern {
        self.pattern
    }

    /// `candidates[i]` is the pool for token `i`
    pub fn candidates(&self) -> &[&'a [String]] {
        &self.candidates
    }

    /// `constraints[i]` is the type token `i` must be unique within, if any
    pub fn constraints(&self) -> &[Option<PlaceholderType>] {
        &self.constraints
    }

    /// Size of the pool used by placeholders of `ty` in this pattern, if any
    pub(crate) fn pool_len(&self, ty: PlaceholderType) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| *c == Some(ty))
            .map(|i| self.candidates[i].len())
    }

    /// The first placeholder type whose pool is smaller than the number of
    /// placeholders that need distinct values from it.
    pub fn exhausted_type(&self) -> Option<PlaceholderType> {
        let counts = self.pattern.placeholder_counts();
        PlaceholderType::ALL.into_iter().find(|ty| {
            let needed = counts[ty.index()];
            needed > 0 && self.pool_len(*ty).unwrap_or(0) < needed
        })
    }

    pub fn is_satisfiable(&self) -> bool {
        self.exhausted_type().is_none()
    }
}
