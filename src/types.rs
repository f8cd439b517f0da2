//! Core types and structures for spray-forge

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::generator::DateStamp;
use crate::input::read_lines_or_empty;

/// Where patterns come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    /// A single pattern given directly
    Single(String),
    /// A file with one pattern per non-blank line
    File(PathBuf),
}

impl PatternSource {
    /// Build from the two mutually exclusive options.
    ///
    /// Supplying both or neither is a configuration conflict.
    pub fn from_options(pattern: Option<String>, patterns_file: Option<PathBuf>) -> Result<Self> {
        match (pattern, patterns_file) {
            (Some(pattern), None) => Ok(Self::Single(pattern)),
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(_), Some(_)) => Err(crate::conflict_error!(
                "--pattern and --patterns-file are mutually exclusive"
            )),
            (None, None) => Err(crate::conflict_error!(
                "one of --pattern or --patterns-file is required"
            )),
        }
    }

    /// Raw pattern strings in processing order.
    ///
    /// An unreadable patterns file yields no patterns (with a warning).
    pub fn load(&self) -> Vec<String> {
        match self {
            PatternSource::Single(pattern) => vec![pattern.clone()],
            PatternSource::File(path) => read_lines_or_empty(path, "patterns"),
        }
    }
}

impl std::fmt::Display for PatternSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternSource::Single(pattern) => write!(f, "pattern '{}'", pattern),
            PatternSource::File(path) => write!(f, "patterns file {}", path.display()),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub source: PatternSource,
    /// External word file for `[WORD]`
    pub nouns: PathBuf,
    /// Output file; standard output when `None`
    pub out: Option<PathBuf>,
    /// Global cap on emitted lines across all patterns
    pub limit: Option<u64>,
    /// Render `{YY}`/`{YYYY}` with this year
    pub dates: Option<DateStamp>,
    /// Show a progress bar on standard error
    pub progress: bool,
}

impl GenerationConfig {
    pub fn new(source: PatternSource, nouns: impl Into<PathBuf>) -> Self {
        Self {
            source,
            nouns: nouns.into(),
            out: None,
            limit: None,
            dates: None,
            progress: false,
        }
    }

    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = Some(out.into());
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_dates(mut self, dates: DateStamp) -> Self {
        self.dates = Some(dates);
        self
    }
}

/// Outcome of processing a single pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternStats {
    pub pattern: String,
    /// Lines written for this pattern
    pub produced: u64,
    /// The pattern could never yield output (pool too small for a type)
    pub unsatisfiable: bool,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Patterns available to the run
    pub patterns_total: usize,
    /// Per-pattern results, for the patterns actually reached
    pub patterns: Vec<PatternStats>,
    /// Lines written across all patterns
    pub produced: u64,
    /// The run stopped because the global limit was reached
    pub limit_reached: bool,
    /// The reader of standard output went away before the run finished
    pub output_closed: bool,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn patterns_processed(&self) -> usize {
        self.patterns.len()
    }

    pub fn unsatisfiable_patterns(&self) -> usize {
        self.patterns.iter().filter(|p| p.unsatisfiable).count()
    }
}

/// Exact combination count for one pattern (count mode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    pub pattern: String,
    /// `None` when the count does not fit in `u64`
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SprayForgeError;

    #[test]
    fn test_pattern_source_conflicts() {
        let both = PatternSource::from_options(Some("[WORD]".into()), Some("p.txt".into()));
        assert!(matches!(both, Err(SprayForgeError::ConfigurationConflict { .. })));

        let neither = PatternSource::from_options(None, None);
        assert!(matches!(neither, Err(SprayForgeError::ConfigurationConflict { .. })));
    }

    #[test]
    fn test_pattern_source_single() {
        let source = PatternSource::from_options(Some("[WORD]!".into()), None).unwrap();
        assert_eq!(source.load(), vec!["[WORD]!"]);
    }

    #[test]
    fn test_pattern_source_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = PatternSource::File(dir.path().join("patterns.txt"));
        assert!(source.load().is_empty());
    }

    #[test]
    fn test_config_builders() {
        let config = GenerationConfig::new(PatternSource::Single("x".into()), "nouns.txt")
            .with_out("out.txt")
            .with_limit(10)
            .with_dates(DateStamp::new(2024));
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.out, Some(PathBuf::from("out.txt")));
        assert_eq!(config.dates.map(|d| d.year()), Some(2024));
        assert!(!config.progress);
    }
}
