//! Rendering of the year tokens `{YY}` and `{YYYY}`

use std::borrow::Cow;

use chrono::Datelike;

use crate::error::Result;

/// Years accepted from the command line; `{YYYY}` stays four digits wide.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Year used to render `{YY}` / `{YYYY}` in generated lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStamp {
    year: i32,
}

impl DateStamp {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Validated stamp for a user supplied year
    pub fn from_year(year: i32) -> Result<Self> {
        if !YEAR_RANGE.contains(&year) {
            return Err(crate::config_error!(
                "year {} is outside {}..={}",
                year,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ));
        }
        Ok(Self::new(year))
    }

    /// Stamp for the current local year
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Replace year tokens in `line`; other brace tokens are left alone.
    ///
    /// The number of lines is preserved but not their distinctness: with
    /// year 2012, `x{YY}` renders to `x12`, the same as the literal pool
    /// value `x12`.
    pub fn render<'l>(&self, line: &'l str) -> Cow<'l, str> {
        if !line.contains("{YY") {
            return Cow::Borrowed(line);
        }
        let long = self.year.to_string();
        let short = format!("{:02}", self.year.rem_euclid(100));
        Cow::Owned(line.replace("{YYYY}", &long).replace("{YY}", &short))
    }
}
