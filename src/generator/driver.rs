//! Multi-pattern driver
//!
//! Runs the patterns in order, streaming every combination to one sink and
//! stopping as soon as the global limit is hit.

use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use super::{DateStamp, Sink};
use crate::error::{Result, SprayForgeError};
use crate::pattern::{Pattern, PatternTokenizer, ResolvedPattern, ValueResolver};
use crate::types::{GenerationConfig, PatternCount, PatternStats, RunSummary};
use crate::words::WordList;

enum Flow {
    Next,
    Stop,
}

/// Drives enumeration over a list of patterns
#[derive(Debug, Clone)]
pub struct Driver<'w> {
    tokenizer: PatternTokenizer,
    resolver: ValueResolver<'w>,
    limit: Option<u64>,
    dates: Option<DateStamp>,
    progress: bool,
}

impl<'w> Driver<'w> {
    /// Create a driver drawing `[WORD]` values from `words`
    pub fn new(words: &'w WordList) -> Result<Self> {
        Ok(Self {
            tokenizer: PatternTokenizer::new()?,
            resolver: ValueResolver::new(words),
            limit: None,
            dates: None,
            progress: false,
        })
    }

    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_dates(mut self, dates: Option<DateStamp>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn limit_hit(&self, produced: u64) -> bool {
        self.limit.is_some_and(|limit| produced >= limit)
    }

    fn parse(&self, patterns: &[String]) -> Vec<Pattern> {
        patterns.iter().map(|p| self.tokenizer.tokenize(p)).collect()
    }

    /// Exact number of valid combinations per pattern, without enumerating
    pub fn count(&self, patterns: &[String]) -> Vec<PatternCount> {
        self.parse(patterns)
            .iter()
            .map(|pattern| PatternCount {
                pattern: pattern.source().to_string(),
                count: self.resolver.resolve(pattern).count(),
            })
            .collect()
    }

    /// Write every valid combination of `patterns` to `sink`, one per line.
    ///
    /// The sink is not flushed here; the caller owns its lifecycle.
    pub fn run<W: Write>(&self, patterns: &[String], sink: &mut W) -> Result<RunSummary> {
        let started = Instant::now();
        let parsed = self.parse(patterns);
        let progress = self.progress_bar(&parsed);

        let mut summary = RunSummary {
            patterns_total: parsed.len(),
            ..Default::default()
        };

        for pattern in &parsed {
            if self.limit_hit(summary.produced) {
                summary.limit_reached = true;
                break;
            }

            let resolved = self.resolver.resolve(pattern);
            let mut stats = PatternStats {
                pattern: pattern.source().to_string(),
                produced: 0,
                unsatisfiable: false,
            };

            let flow = match resolved.exhausted_type() {
                Some(ty) => {
                    tracing::warn!(
                        pattern = %pattern,
                        placeholder = %ty,
                        needed = pattern.placeholder_counts()[ty.index()],
                        pool = self.resolver.pool(ty).len(),
                        "Pattern needs more distinct values than the pool holds; it produces no output"
                    );
                    stats.unsatisfiable = true;
                    Flow::Next
                }
                None => self.emit(&resolved, sink, &mut summary, &mut stats, &progress)?,
            };

            tracing::debug!(pattern = %pattern, produced = stats.produced, "Pattern done");
            summary.patterns.push(stats);

            if let Flow::Stop = flow {
                break;
            }
        }

        progress.finish_and_clear();
        summary.elapsed = started.elapsed();

        tracing::info!(
            patterns = summary.patterns_processed(),
            of = summary.patterns_total,
            produced = summary.produced,
            unsatisfiable = summary.unsatisfiable_patterns(),
            limit_reached = summary.limit_reached,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Generation finished"
        );

        Ok(summary)
    }

    fn emit<W: Write>(
        &self,
        resolved: &ResolvedPattern<'_>,
        sink: &mut W,
        summary: &mut RunSummary,
        stats: &mut PatternStats,
        progress: &ProgressBar,
    ) -> Result<Flow> {
        for line in resolved.combinations() {
            let written = match self.dates {
                Some(dates) => writeln!(sink, "{}", dates.render(&line)),
                None => writeln!(sink, "{}", line),
            };

            if let Err(e) = written {
                let err = SprayForgeError::from(e);
                if err.is_broken_pipe() {
                    tracing::debug!("Output closed by reader; stopping");
                    summary.output_closed = true;
                    return Ok(Flow::Stop);
                }
                return Err(err);
            }

            stats.produced += 1;
            summary.produced += 1;
            progress.inc(1);

            if self.limit_hit(summary.produced) {
                summary.limit_reached = true;
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Next)
    }

    fn progress_bar(&self, patterns: &[Pattern]) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let total = patterns.iter().try_fold(0u64, |acc, pattern| {
            acc.checked_add(self.resolver.resolve(pattern).count()?)
        });
        let total = match (total, self.limit) {
            (Some(total), Some(limit)) => Some(total.min(limit)),
            (None, Some(limit)) => Some(limit),
            (total, None) => total,
        };

        match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                bar.set_style(
                    ProgressStyle::with_template(
                        "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({per_sec}, eta {eta})",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => ProgressBar::new_spinner(),
        }
    }
}

/// Run a full generation: load words and patterns, open the sink, drive,
/// and flush the sink on every exit path.
pub fn generate(config: &GenerationConfig) -> Result<RunSummary> {
    let words = WordList::load(&config.nouns);
    tracing::info!(words = words.len(), path = %config.nouns.display(), "Word pool ready");

    let patterns = config.source.load();
    tracing::info!(patterns = patterns.len(), source = %config.source, "Patterns loaded");

    let driver = Driver::new(&words)?
        .with_limit(config.limit)
        .with_dates(config.dates)
        .with_progress(config.progress);

    let mut sink = Sink::open(config.out.as_deref())?;
    let result = driver.run(&patterns, &mut sink);
    let finished = sink.finish();

    let summary = result?;
    match finished {
        Err(e) if e.is_broken_pipe() => Ok(RunSummary {
            output_closed: true,
            ..summary
        }),
        Err(e) => Err(e),
        Ok(()) => Ok(summary),
    }
}

/// Count valid combinations for every configured pattern without writing.
pub fn count_patterns(config: &GenerationConfig) -> Result<Vec<PatternCount>> {
    let words = WordList::load(&config.nouns);
    let patterns = config.source.load();
    Ok(Driver::new(&words)?.count(&patterns))
}
