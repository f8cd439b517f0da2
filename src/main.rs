//! Spray Forge - pattern-driven wordlist generation
//!
//! Expands `[WORD]`, `[NUMBER]` and `[SPECIAL]` placeholders into a
//! deterministic candidate list, one line per combination.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spray_forge::{DateStamp, GenerationConfig, PatternCount, PatternSource, SprayForgeError};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (env-filter syntax)
const LOG_ENV: &str = "SPRAYFORGE_LOG";

#[derive(Debug, clap::Parser)]
#[clap(name = "spray-forge", version, about = "Generate wordlists from placeholder patterns")]
pub struct Args {
    /// A single pattern, e.g. `[WORD][SPECIAL][NUMBER]`. Conflicts with
    /// `--patterns-file`.
    #[clap(long)]
    pub pattern: Option<String>,
    /// File with one pattern per line, processed in file order. Blank lines
    /// are skipped.
    #[clap(long)]
    pub patterns_file: Option<PathBuf>,
    /// File with one word per line for `[WORD]`. A missing file only
    /// produces a warning; the built-in tokens are still used.
    #[clap(long)]
    pub nouns: PathBuf,
    /// Output file. Defaults to standard output.
    #[clap(long, short)]
    pub out: Option<PathBuf>,
    /// Stop after this many lines in total, across all patterns.
    #[clap(long)]
    pub limit: Option<u64>,
    /// Replace `{YY}` and `{YYYY}` with the current year.
    #[clap(long)]
    pub resolve_dates: bool,
    /// Replace `{YY}` and `{YYYY}` using this year. Implies `--resolve-dates`.
    #[clap(long)]
    pub year: Option<i32>,
    /// Print the number of combinations per pattern instead of generating.
    #[clap(long)]
    pub count: bool,
    /// Show a progress bar on standard error.
    #[clap(long)]
    pub progress: bool,
    /// More log output (`-v` info, `-vv` debug). Overridden by `SPRAYFORGE_LOG`.
    #[clap(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors.
    #[clap(long, short)]
    pub quiet: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    fn into_config(self) -> spray_forge::Result<(GenerationConfig, bool)> {
        let source = PatternSource::from_options(self.pattern, self.patterns_file)?;
        let dates = match (self.year, self.resolve_dates) {
            (Some(year), _) => Some(DateStamp::from_year(year)?),
            (None, true) => Some(DateStamp::current()),
            (None, false) => None,
        };

        let config = GenerationConfig {
            source,
            nouns: self.nouns,
            out: self.out,
            limit: self.limit,
            dates,
            progress: self.progress,
        };
        Ok((config, self.count))
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // Load .env before reading SPRAYFORGE_LOG
    if let Err(e) = spray_forge::init() {
        eprintln!("error: failed to initialize: {}", e);
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    init_tracing(&args);

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SprayForgeError>() {
                Some(err) => eprintln!("error: {}", err.user_message()),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let (config, count_only) = args.into_config()?;
    tracing::debug!(?config, "Configuration");

    if count_only {
        let counts = spray_forge::count_patterns(&config)?;
        print_counts(&counts, config.limit)?;
        return Ok(());
    }

    let summary = spray_forge::generate(&config)?;
    if let Some(out) = &config.out {
        tracing::info!(path = %out.display(), lines = summary.produced, "Wordlist written");
    }
    Ok(())
}

/// Count mode output: `<count>\t<pattern>` per pattern, then the total
fn print_counts(counts: &[PatternCount], limit: Option<u64>) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut total = Some(0u64);
    for entry in counts {
        match entry.count {
            Some(n) => writeln!(out, "{}\t{}", n, entry.pattern)?,
            None => writeln!(out, "overflow\t{}", entry.pattern)?,
        }
        total = total.zip(entry.count).and_then(|(acc, n)| acc.checked_add(n));
    }

    let total = match (total, limit) {
        (Some(total), Some(limit)) => Some(total.min(limit)),
        (None, Some(limit)) => Some(limit),
        (total, None) => total,
    };
    match total {
        Some(n) => writeln!(out, "total\t{}", n)?,
        None => writeln!(out, "total\toverflow")?,
    }
    out.flush()
}
