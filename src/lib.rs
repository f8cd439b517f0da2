//! Spray Forge - pattern-driven wordlist generation
//!
//! Expands templates such as `[WORD][SPECIAL][NUMBER]` into every string
//! obtainable from the word, number and special-character pools, never
//! reusing a value for two placeholders of the same type in one line.
//! The output is a plain list, one candidate per line, for use as input to
//! password-spraying tooling during an authorized assessment.

pub mod error;
pub mod generator;
mod input;
pub mod pattern;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use error::{Result, SprayForgeError};
pub use types::{GenerationConfig, PatternCount, PatternSource, PatternStats, RunSummary};

// Re-export main functionality
pub use generator::{count_patterns, generate, Combinations, DateStamp, Driver, Sink};
pub use pattern::{Pattern, PatternTokenizer, PlaceholderType, ResolvedPattern, Token, ValueResolver};
pub use words::{build_word_list, WordList};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
