//! Coverage checker
//!
//! This module wires the grid, the parser and the gap scans into one pipeline.
//! Every entry point only differs in how a single input item is resolved to
//! an `Option<NaiveDateTime>`; the rest of the check is shared.

use super::error::{CoverageError, CoverageResult};
use super::gaps::{collect_invalid_positions, find_missing, present_timestamps};
use super::grid::canonical_sequence;
use super::parser::TimestampParser;
use super::report::CoverageReport;
use chrono::{NaiveDate, NaiveDateTime};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Inputs at least this long are resolved on the rayon pool by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Stateless coverage checker with a configured parser
#[derive(Debug, Clone)]
pub struct CoverageChecker {
    /// Parser used for text items
    parser: TimestampParser,
    /// Minimum input length for parallel resolution
    parallel_threshold: usize,
}

impl CoverageChecker {
    /// Create a checker with the built-in formats and default threshold
    pub fn new() -> Self {
        Self { parser: TimestampParser::new(), parallel_threshold: DEFAULT_PARALLEL_THRESHOLD }
    }

    /// Use a custom parser
    pub fn with_parser(mut self, parser: TimestampParser) -> Self {
        self.parser = parser;
        self
    }

    /// Set the minimum input length for parallel resolution
    ///
    /// `usize::MAX` keeps every check sequential.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Parser used for text items
    pub fn parser(&self) -> &TimestampParser {
        &self.parser
    }

    /// Minimum input length for parallel resolution
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Check a sequence of timestamp strings
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn check_strings<S: AsRef<str> + Sync>(
        &self,
        items: &[S],
        target_date: NaiveDate,
    ) -> CoverageReport {
        let parser = &self.parser;
        self.check_with(items, target_date, |item| parser.parse(item.as_ref()))
    }

    /// Check a sequence of typed timestamps where `None` marks a missing value
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn check_typed(
        &self,
        items: &[Option<NaiveDateTime>],
        target_date: NaiveDate,
    ) -> CoverageReport {
        self.check_with(items, target_date, |item| *item)
    }

    /// Check a JSON array of timestamps
    ///
    /// String elements are parsed, `null` is a missing value and any other
    /// element is invalid. A value that is not an array is rejected.
    #[instrument(skip(self, value))]
    pub fn check_json(&self, value: &Value, target_date: NaiveDate) -> CoverageResult<CoverageReport> {
        let items = value
            .as_array()
            .ok_or_else(|| CoverageError::NotASequence(json_kind(value).to_string()))?;

        let parser = &self.parser;
        Ok(self.check_with(items, target_date, |item| match item {
            Value::String(raw) => parser.parse(raw),
            _ => None,
        }))
    }

    /// Shared pipeline: resolve, scan for invalid entries, scan for gaps, assemble
    pub fn check_with<T, F>(&self, items: &[T], target_date: NaiveDate, resolve: F) -> CoverageReport
    where
        T: Sync,
        F: Fn(&T) -> Option<NaiveDateTime> + Sync,
    {
        let resolved: Vec<Option<NaiveDateTime>> = if items.len() >= self.parallel_threshold {
            debug!("Resolving {} items in parallel", items.len());
            items.par_iter().map(&resolve).collect()
        } else {
            items.iter().map(&resolve).collect()
        };

        let invalid_positions = collect_invalid_positions(&resolved);
        let present = present_timestamps(&resolved);
        let canonical = canonical_sequence(target_date);
        let missing = find_missing(&canonical, &present);

        let report = CoverageReport::assemble(target_date, missing, invalid_positions);
        info!(
            target_date = %target_date,
            matched = report.is_match,
            missing = report.missing_count,
            invalid = report.invalid_count,
            "Coverage check complete"
        );
        report
    }
}

impl Default for CoverageChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a sequence of timestamp strings against `target_date`
pub fn check_coverage<S: AsRef<str> + Sync>(items: &[S], target_date: NaiveDate) -> CoverageReport {
    CoverageChecker::new().check_strings(items, target_date)
}

/// Check a sequence of typed timestamps (`None` = missing value) against `target_date`
pub fn check_coverage_typed(
    items: &[Option<NaiveDateTime>],
    target_date: NaiveDate,
) -> CoverageReport {
    CoverageChecker::new().check_typed(items, target_date)
}

/// Check a JSON array of timestamps against `target_date`
pub fn check_json(value: &Value, target_date: NaiveDate) -> CoverageResult<CoverageReport> {
    CoverageChecker::new().check_json(value, target_date)
}

/// Parse a `YYYY-MM-DD` target date
pub fn parse_target_date(raw: &str) -> CoverageResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CoverageError::InvalidTargetDate(raw.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
