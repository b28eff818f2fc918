//! Day coverage checking
//!
//! This module contains the canonical grid, timestamp parsing, gap detection,
//! report assembly, input loading, error handling and logging.
//!
//! # Overview
//!
//! A check runs in four steps:
//!
//! - **Resolve**: each input item becomes an `Option<NaiveDateTime>`
//! - **Invalid scan**: positions that resolved to `None` are collected
//! - **Gap scan**: canonical 10-second slots with no matching timestamp are collected
//! - **Assemble**: both scans are combined into a [`CoverageReport`]
//!
//! # Usage Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use day_coverage_checker::coverage::*;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
//! let items: Vec<String> = canonical_sequence(day)
//!     .iter()
//!     .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
//!     .collect();
//!
//! let report = check_coverage(&items, day);
//! assert!(report.is_match);
//! ```

pub mod checker;
pub mod error;
pub mod gaps;
pub mod grid;
pub mod input;
pub mod logging;
pub mod parser;
pub mod report;

// Re-export all public types for convenience
pub use checker::*;
pub use error::*;
pub use gaps::*;
pub use grid::*;
pub use input::*;
pub use logging::*;
pub use parser::*;
pub use report::*;
