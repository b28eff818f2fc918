//! Configuration and format types for the day coverage checker
//!
//! This module contains the configuration structures and the enumerations used
//! to select input and output formats.
//!
//! # Usage Example
//!
//! ```rust
//! use day_coverage_checker::types::*;
//!
//! let config = CheckerConfig {
//!     target_date: Some("2025-10-20".to_string()),
//!     input: Some("samples.json".to_string()),
//!     ..Default::default()
//! };
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.resolved_input_format().unwrap(), InputFormat::Json);
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
