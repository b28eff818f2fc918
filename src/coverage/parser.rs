//! Timestamp parsing
//!
//! This module turns raw input tokens into naive timestamps. Parsing never
//! fails loudly: anything that cannot be resolved becomes `None` and is later
//! reported as an invalid entry.
//!
//! # Accepted formats
//!
//! Surrounding whitespace is trimmed, then the first matching form wins:
//!
//! 1. RFC 3339 (`2025-10-20T00:00:10Z`, `2025-10-20T09:00:10+09:00`). The offset
//!    is dropped and the wall-clock time is kept.
//! 2. `%Y-%m-%d %H:%M:%S%.f`, `%Y-%m-%dT%H:%M:%S%.f`, `%Y/%m/%d %H:%M:%S%.f`,
//!    `%Y%m%d %H%M%S`, `%Y-%m-%d %H:%M`, `%Y-%m-%dT%H:%M`
//! 3. Date only (`%Y-%m-%d`, `%Y/%m/%d`), resolved to midnight
//! 4. Any extra formats registered with [`TimestampParser::with_extra_formats`]
//!
//! A seconds field of `60` is rejected. chrono reads it as a leap second, but
//! such a value never names a real instant on the sampling grid.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rayon::prelude::*;
use tracing::debug;

/// Built-in date-time formats, tried in order
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y%m%d %H%M%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Built-in date-only formats, resolved to midnight
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Permissive string to timestamp parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampParser {
    /// Caller supplied `chrono` format strings tried after the built-ins
    extra_formats: Vec<String>,
}

impl TimestampParser {
    /// Create a parser that only knows the built-in formats
    pub fn new() -> Self {
        Self::default()
    }

    /// Register additional `chrono` format strings
    pub fn with_extra_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_formats.extend(formats.into_iter().map(Into::into));
        self
    }

    /// Extra formats registered on this parser
    pub fn extra_formats(&self) -> &[String] {
        &self.extra_formats
    }

    /// Parse a single token, returning `None` when it is not a timestamp
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }

        DateTime::parse_from_rfc3339(token)
            .ok()
            .map(|dt| dt.naive_local())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .copied()
                    .chain(self.extra_formats.iter().map(String::as_str))
                    .find_map(|fmt| NaiveDateTime::parse_from_str(token, fmt).ok())
            })
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .copied()
                    .chain(self.extra_formats.iter().map(String::as_str))
                    .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .filter(|dt| dt.nanosecond() < 1_000_000_000)
    }

    /// Parse every token, keeping results aligned with the input positions
    pub fn parse_all<S: AsRef<str>>(&self, items: &[S]) -> Vec<Option<NaiveDateTime>> {
        let resolved: Vec<_> = items.iter().map(|item| self.parse(item.as_ref())).collect();
        debug!("Parsed {} tokens sequentially", resolved.len());
        resolved
    }

    /// Parse every token on the rayon pool, keeping input order
    pub fn par_parse_all<S: AsRef<str> + Sync>(&self, items: &[S]) -> Vec<Option<NaiveDateTime>> {
        let resolved: Vec<_> = items.par_iter().map(|item| self.parse(item.as_ref())).collect();
        debug!("Parsed {} tokens on {} threads", resolved.len(), rayon::current_num_threads());
        resolved
    }
}
