//! Constrained enumeration of one resolved pattern
//!
//! Output order equals the Cartesian product of the token pools with the
//! last token varying fastest, minus every tuple where two placeholders of
//! the same type share a value.

use crate::pattern::{PlaceholderType, ResolvedPattern};

impl<'a> ResolvedPattern<'a> {
    /// Lazily enumerate the valid combinations. Each call starts over.
    pub fn combinations(&self) -> Combinations<'_, 'a> {
        Combinations::new(self)
    }

    /// Exact number of valid combinations, or `None` on `u64` overflow.
    ///
    /// Pools hold distinct values, so `k` placeholders drawing from a pool
    /// of `n` values have `n * (n - 1) * ... * (n - k + 1)` assignments.
    pub fn count(&self) -> Option<u64> {
        let counts = self.pattern().placeholder_counts();
        let mut total: u64 = 1;

        for ty in PlaceholderType::ALL {
            let k = counts[ty.index()];
            if k == 0 {
                continue;
            }
            let n = self.pool_len(ty).unwrap_or(0);
            if n < k {
                return Some(0);
            }
            for taken in 0..k {
                total = total.checked_mul((n - taken) as u64)?;
            }
        }

        Some(total)
    }
}

/// Iterator over the valid combinations of a [`ResolvedPattern`]
///
/// Holds one index per token (an odometer). When the value at some
/// position clashes with an earlier placeholder of the same type, that
/// position is advanced immediately, which skips every tuple sharing the
/// clashing prefix without visiting it.
#[derive(Debug, Clone)]
pub struct Combinations<'r, 'a> {
    resolved: &'r ResolvedPattern<'a>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'r, 'a> Combinations<'r, 'a> {
    fn new(resolved: &'r ResolvedPattern<'a>) -> Self {
        let done = !resolved.is_satisfiable();
        Self {
            resolved,
            indices: vec![0; resolved.candidates.len()],
            started: false,
            done,
        }
    }

    fn value(&self, pos: usize) -> &'a str {
        let pool: &'a [String] = self.resolved.candidates[pos];
        &pool[self.indices[pos]]
    }

    /// Does the value at `pos` repeat an earlier value of the same type?
    fn clashes(&self, pos: usize) -> bool {
        let Some(ty) = self.resolved.constraints[pos] else {
            return false;
        };
        let value = self.value(pos);
        (0..pos).any(|j| self.resolved.constraints[j] == Some(ty) && self.value(j) == value)
    }

    /// Move the odometer from `pos` to the next valid full assignment.
    /// Positions before `pos` are already valid.
    fn seek(&mut self, mut pos: usize) -> bool {
        let last = self.indices.len() - 1;
        loop {
            if self.indices[pos] >= self.resolved.candidates[pos].len() {
                if pos == 0 {
                    return false;
                }
                self.indices[pos] = 0;
                pos -= 1;
                self.indices[pos] += 1;
                continue;
            }
            if self.clashes(pos) {
                self.indices[pos] += 1;
                continue;
            }
            if pos == last {
                return true;
            }
            pos += 1;
            self.indices[pos] = 0;
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for pos in 0..self.indices.len() {
            out.push_str(self.value(pos));
        }
        out
    }
}

impl Iterator for Combinations<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Product of zero pools is a single empty tuple
        if self.indices.is_empty() {
            self.done = true;
            return Some(String::new());
        }

        let found = if self.started {
            let last = self.indices.len() - 1;
            self.indices[last] += 1;
            self.seek(last)
        } else {
            self.started = true;
            self.seek(0)
        };

        if found {
            Some(self.render())
        } else {
            self.done = true;
            None
        }
    }
}

impl std::iter::FusedIterator for Combinations<'_, '_> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::pattern::{Pattern, PatternTokenizer, Token, ValueResolver};
    use crate::words::{build_word_list, WordList};

    fn parse(pattern: &str) -> Pattern {
        PatternTokenizer::new().unwrap().tokenize(pattern)
    }

    fn generate(pattern: &str, words: &WordList) -> Vec<String> {
        let resolver = ValueResolver::new(words);
        let pattern = parse(pattern);
        let resolved = resolver.resolve(&pattern);
        resolved.combinations().collect()
    }

    /// Straight product-then-filter, used as the reference ordering.
    fn brute_force(pattern: &str, words: &WordList) -> Vec<String> {
        let resolver = ValueResolver::new(words);
        let pattern = parse(pattern);
        let resolved = resolver.resolve(&pattern);
        let pools = resolved.candidates();

        let mut tuples: Vec<Vec<usize>> = vec![vec![]];
        for pool in pools {
            tuples = tuples
                .into_iter()
                .flat_map(|t| {
                    (0..pool.len()).map(move |i| {
                        let mut t = t.clone();
                        t.push(i);
                        t
                    })
                })
                .collect();
        }

        tuples
            .into_iter()
            .filter(|t| {
                let mut seen = HashSet::new();
                t.iter().enumerate().all(|(pos, &i)| match resolved.constraints()[pos] {
                    Some(ty) => seen.insert((ty, pools[pos][i].as_str())),
                    None => true,
                })
            })
            .map(|t| t.iter().enumerate().map(|(pos, &i)| pools[pos][i].as_str()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_word_number_scenario() {
        let words = build_word_list(["alice", "bob"]);
        let out = generate("[WORD]-[NUMBER]", &words);

        assert_eq!(out.len(), 42);
        assert_eq!(out.first().map(String::as_str), Some("alice-{YY}"));
        assert_eq!(out.get(1).map(String::as_str), Some("alice-{YYYY}"));
        assert_eq!(out.get(7).map(String::as_str), Some("bob-{YY}"));
        assert_eq!(out.last().map(String::as_str), Some("{givenName}-123"));
    }

    #[test]
    fn test_same_type_never_repeats() {
        let words = build_word_list(["alice"]);
        let out = generate("[WORD][WORD]", &words);

        assert_eq!(out.len(), 20);
        for w in words.iter() {
            assert!(!out.contains(&format!("{w}{w}")));
        }
        assert_eq!(out[0], "alice{monthsGerman}");
    }

    #[test]
    fn test_literal_only_pattern() {
        let words = build_word_list(["alice"]);
        assert_eq!(generate("Welcome2024!", &words), vec!["Welcome2024!"]);
        assert_eq!(generate("", &words), vec![""]);
    }

    #[test]
    fn test_literals_may_repeat_placeholder_values() {
        let words = build_word_list(Vec::<String>::new());
        let out = generate("![SPECIAL]", &words);
        assert_eq!(out, vec!["!!", "!.", "!#", "!-", "!_"]);
    }

    #[test]
    fn test_pigeonhole_yields_nothing() {
        let words = build_word_list(Vec::<String>::new());
        assert!(generate(&"[SPECIAL]".repeat(6), &words).is_empty());
        assert!(generate(&"[NUMBER]".repeat(8), &words).is_empty());
        assert!(generate(&"[WORD]".repeat(5), &words).is_empty());
    }

    #[test]
    fn test_pigeonhole_with_huge_other_pools_is_immediate() {
        let words = build_word_list((0..10_000).map(|i| format!("w{i}")));
        let resolver = ValueResolver::new(&words);
        let pattern = parse(&format!("[WORD][WORD][WORD]{}", "[SPECIAL]".repeat(6)));
        let resolved = resolver.resolve(&pattern);

        assert!(!resolved.is_satisfiable());
        assert_eq!(resolved.count(), Some(0));
        assert_eq!(resolved.combinations().next(), None);
    }

    #[test]
    fn test_matches_product_then_filter() {
        let words = build_word_list(["alice", "bob", "{sn}"]);
        for pattern in [
            "[WORD][WORD]",
            "[SPECIAL]x[SPECIAL][NUMBER]",
            "[NUMBER][WORD][NUMBER][SPECIAL][NUMBER]",
            "a[SPECIAL][SPECIAL][SPECIAL]b",
            "[WORD]",
        ] {
            assert_eq!(generate(pattern, &words), brute_force(pattern, &words), "{pattern}");
        }
    }

    #[test]
    fn test_count_matches_enumeration() {
        let words = build_word_list(["alice", "bob"]);
        let resolver = ValueResolver::new(&words);
        for source in ["[WORD]-[NUMBER]", "[WORD][WORD][SPECIAL][SPECIAL]", "plain", "[NUMBER][NUMBER][NUMBER]"] {
            let pattern = parse(source);
            let resolved = resolver.resolve(&pattern);
            assert_eq!(resolved.count(), Some(resolved.combinations().count() as u64), "{source}");
        }
    }

    #[test]
    fn test_count_overflow() {
        let words = build_word_list((0..1000).map(|i| i.to_string()));
        let resolver = ValueResolver::new(&words);
        let pattern = parse(&"[WORD]".repeat(8));
        assert_eq!(resolver.resolve(&pattern).count(), None);
    }

    #[test]
    fn test_restartable() {
        let words = build_word_list(["alice", "bob"]);
        let resolver = ValueResolver::new(&words);
        let pattern = parse("[WORD][SPECIAL][WORD]");
        let resolved = resolver.resolve(&pattern);

        let first: Vec<String> = resolved.combinations().collect();
        let second: Vec<String> = resolved.combinations().collect();
        assert_eq!(first, second);

        let mut partial = resolved.combinations();
        partial.next();
        assert_eq!(resolved.combinations().next(), first.first().cloned());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let words = build_word_list(Vec::<String>::new());
        let resolver = ValueResolver::new(&words);
        let pattern = parse("[SPECIAL]");
        let resolved = resolver.resolve(&pattern);
        let mut it = resolved.combinations();
        assert_eq!(it.by_ref().count(), 5);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_empty_token_list_yields_one_empty_string() {
        let words = build_word_list(Vec::<String>::new());
        let resolver = ValueResolver::new(&words);
        let pattern = Pattern::new("", Vec::<Token>::new());
        let resolved = resolver.resolve(&pattern);
        assert_eq!(resolved.combinations().collect::<Vec<_>>(), vec![String::new()]);
        assert_eq!(resolved.count(), Some(1));
    }
}
