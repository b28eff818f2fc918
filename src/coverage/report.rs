//! Coverage report
//!
//! This module contains the result record returned by every coverage check,
//! along with helpers for presenting gaps to humans.

use super::grid::{slot_index, SLOTS_PER_DAY};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one day of samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Day that was checked
    pub target_date: NaiveDate,
    /// True when there are no gaps and no invalid entries
    #[serde(rename = "match")]
    pub is_match: bool,
    /// Number of canonical slots with no matching input
    pub missing_count: usize,
    /// Unmatched canonical slots, ascending
    pub missing_timestamps: Vec<NaiveDateTime>,
    /// Number of input items that did not resolve to a timestamp
    pub invalid_count: usize,
    /// Zero-based input positions of the unresolved items, ascending
    pub invalid_positions: Vec<usize>,
}

/// A run of consecutive missing slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRange {
    /// First missing slot of the run
    pub start: NaiveDateTime,
    /// Last missing slot of the run (inclusive)
    pub end: NaiveDateTime,
    /// Number of slots in the run
    pub slots: usize,
}

impl CoverageReport {
    /// Assemble a report from the gap scan and invalid-entry scan
    pub fn assemble(
        target_date: NaiveDate,
        missing_timestamps: Vec<NaiveDateTime>,
        invalid_positions: Vec<usize>,
    ) -> Self {
        let missing_count = missing_timestamps.len();
        let invalid_count = invalid_positions.len();

        Self {
            target_date,
            is_match: missing_count == 0 && invalid_count == 0,
            missing_count,
            missing_timestamps,
            invalid_count,
            invalid_positions,
        }
    }

    /// Number of canonical slots that were matched
    pub fn covered_count(&self) -> usize {
        SLOTS_PER_DAY.saturating_sub(self.missing_count)
    }

    /// Fraction of the day's slots that were matched, in `[0.0, 1.0]`
    pub fn coverage_ratio(&self) -> f64 {
        self.covered_count() as f64 / SLOTS_PER_DAY as f64
    }

    /// Collapse consecutive missing slots into ranges
    pub fn missing_ranges(&self) -> Vec<GapRange> {
        let mut ranges: Vec<GapRange> = Vec::new();
        let mut previous: Option<usize> = None;

        for &slot in &self.missing_timestamps {
            let index = slot_index(self.target_date, slot);
            match ranges.last_mut() {
                Some(range) if index.is_some() && previous.map(|i| i + 1) == index => {
                    range.end = slot;
                    range.slots += 1;
                }
                _ => ranges.push(GapRange { start: slot, end: slot, slots: 1 }),
            }
            previous = index;
        }

        ranges
    }
}

impl fmt::Display for GapRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slots == 1 {
            write!(f, "{}", self.start.format("%H:%M:%S"))
        } else {
            write!(
                f,
                "{} - {} ({} slots)",
                self.start.format("%H:%M:%S"),
                self.end.format("%H:%M:%S"),
                self.slots
            )
        }
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coverage report for {}", self.target_date)?;
        writeln!(f, "  Match: {}", if self.is_match { "yes" } else { "no" })?;
        writeln!(
            f,
            "  Covered: {}/{} ({:.2}%)",
            self.covered_count(),
            SLOTS_PER_DAY,
            self.coverage_ratio() * 100.0
        )?;
        writeln!(f, "  Missing: {}", self.missing_count)?;
        for range in self.missing_ranges() {
            writeln!(f, "    {}", range)?;
        }
        writeln!(f, "  Invalid: {}", self.invalid_count)?;
        if !self.invalid_positions.is_empty() {
            let positions: Vec<String> =
                self.invalid_positions.iter().map(ToString::to_string).collect();
            writeln!(f, "    positions: {}", positions.join(", "))?;
        }
        Ok(())
    }
}
