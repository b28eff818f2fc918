//! Day Coverage Checker
//!
//! Validates that a sequence of timestamps covers one calendar day on a fixed
//! 10-second sampling grid, reporting gaps and entries that are not timestamps.
//!
//! # Overview
//!
//! A day is expected to hold 8640 samples, from 00:00:00 to 23:59:50. Given the
//! target day and the observed samples (as strings or as typed values), the
//! checker reports:
//!
//! - **Missing slots**: grid timestamps with no matching sample, ascending
//! - **Invalid entries**: input positions that did not resolve to a timestamp
//! - **Match**: true only when there are neither gaps nor invalid entries
//!
//! Samples outside the target day, or between grid slots, are ignored: the
//! check certifies coverage of the grid, not exclusivity of the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use day_coverage_checker::*;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
//! let items = vec!["2025-10-20 00:00:00", "2025-10-20 00:00:10", "xyz"];
//!
//! let report = check_coverage(&items, day);
//! assert!(!report.is_match);
//! assert_eq!(report.missing_count, 8638);
//! assert_eq!(report.invalid_positions, vec![2]);
//! ```
//!
//! ## Module Organization
//!
//! - [`coverage`]: grid, parsing, gap detection, reports, input loading, logging
//! - [`types`]: configuration and format selection
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod coverage;
pub mod types;

// Checking entry points and report types
pub use coverage::{
    canonical_sequence, check_coverage, check_coverage_typed, check_json, parse_target_date,
    CoverageChecker, CoverageError, CoverageReport, CoverageResult, GapRange, TimestampParser,
    SAMPLING_INTERVAL_SECS, SLOTS_PER_DAY,
};

// Input loading and logging
pub use coverage::{load_input, InputItems, LoggingConfig};

// Configuration
pub use types::{
    CheckerConfig, CliArgs, ConfigError, ConfigValidationError, InputFormat, OutputFormat,
};
