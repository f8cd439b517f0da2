//! Wordlist generation: enumeration, output and the multi-pattern driver

mod combinations;
mod dates;
mod driver;
mod sink;

pub use combinations::Combinations;
pub use dates::DateStamp;
pub use driver::{count_patterns, generate, Driver};
pub use sink::Sink;
