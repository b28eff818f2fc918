//! Configuration structures for the day coverage checker
//!
//! This module contains the command-line arguments, the optional JSON
//! configuration file and the merged checker configuration with validation.

use super::{InputFormat, OutputFormat};
use crate::coverage::{CoverageChecker, TimestampParser, DEFAULT_PARALLEL_THRESHOLD};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "day-coverage-checker",
    version,
    about = "Day Coverage Checker - Verifies that timestamps cover a full day on a 10-second grid",
    long_about = "Checks that a list of timestamps covers every 10-second slot of one calendar day \
(8640 slots from 00:00:00 to 23:59:50) and reports missing slots and unparsable entries.

EXAMPLES:
    # Check a text file with one timestamp per line
    day-coverage-checker --date 2025-10-20 --input samples.txt

    # Check a JSON array and print a human readable summary
    day-coverage-checker --date 2025-10-20 --input samples.json --output-format text

    # Accept an additional timestamp layout
    day-coverage-checker --date 2025-10-20 --input samples.txt --extra-format '%d.%m.%Y %H:%M:%S'

    # Generate configuration template
    day-coverage-checker --print-config > checker.json

EXIT STATUS:
    0  the day is fully covered and every entry parsed
    2  gaps or invalid entries were found
    1  usage, configuration or I/O error

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Day to check (YYYY-MM-DD)
    #[arg(long, help = "Day to check (YYYY-MM-DD)")]
    pub date: Option<String>,

    /// Input file with the timestamps to check
    #[arg(short, long, help = "Input file with the timestamps to check")]
    pub input: Option<String>,

    /// Input file layout
    #[arg(
        long,
        help = "Input format (text or json)",
        long_help = "Layout of the input file: 'text' (one timestamp per line) or 'json' (an array of strings and nulls). Default: inferred from the file extension"
    )]
    pub input_format: Option<String>,

    /// Report output format
    #[arg(
        long,
        help = "Output format (json or text)",
        long_help = "Output format for the coverage report. Supported formats: json, text. Default: json"
    )]
    pub output_format: Option<String>,

    /// Additional chrono format strings accepted by the parser
    #[arg(
        long = "extra-format",
        help = "Additional timestamp format (chrono syntax, repeatable)"
    )]
    pub extra_formats: Vec<String>,

    /// Minimum item count for parallel parsing
    #[arg(long, help = "Minimum item count for parallel parsing")]
    pub parallel_threshold: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the check
    #[arg(long, help = "Validate configuration without running the check")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Day to check (YYYY-MM-DD)
    pub target_date: Option<String>,

    /// Input file with the timestamps to check
    pub input: Option<String>,

    /// Input file layout
    pub input_format: Option<String>,

    /// Report output format
    pub output_format: Option<String>,

    /// Additional chrono format strings accepted by the parser
    pub extra_formats: Option<Vec<String>>,

    /// Minimum item count for parallel parsing
    pub parallel_threshold: Option<usize>,
}

/// Configuration for a coverage check run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Day to check (YYYY-MM-DD)
    pub target_date: Option<String>,

    /// Input file with the timestamps to check
    pub input: Option<String>,

    /// Input file layout; inferred from the input extension when unset
    pub input_format: Option<String>,

    /// Report output format
    pub output_format: String,

    /// Additional chrono format strings accepted by the parser
    pub extra_formats: Vec<String>,

    /// Minimum item count for parallel parsing
    pub parallel_threshold: usize,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for checker configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// No target date was given
    #[error("A target date is required (--date or \"target_date\")")]
    MissingTargetDate,

    /// Target date is not a valid calendar date
    #[error("Invalid target date '{0}' (expected YYYY-MM-DD)")]
    InvalidTargetDate(String),

    /// No input file was given
    #[error("An input file is required (--input or \"input\")")]
    MissingInput,

    /// Input format is unknown
    #[error("Invalid input format: {0}")]
    InvalidInputFormat(String),

    /// Output format is unknown
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    /// An extra parser format is blank
    #[error("Extra timestamp formats must not be empty")]
    EmptyExtraFormat,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            target_date: None,
            input: None,
            input_format: None,
            output_format: "json".to_string(),
            extra_formats: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CheckerConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            target_date: config_file.target_date.or(defaults.target_date),
            input: config_file.input.or(defaults.input),
            input_format: config_file.input_format.or(defaults.input_format),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            extra_formats: config_file.extra_formats.unwrap_or(defaults.extra_formats),
            parallel_threshold: config_file
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.date {
            config.target_date = Some(value);
        }
        if let Some(value) = args.input {
            config.input = Some(value);
        }
        if let Some(value) = args.input_format {
            config.input_format = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.parallel_threshold {
            config.parallel_threshold = value;
        }

        // Extra formats from the CLI add to those from the file
        config.extra_formats.extend(args.extra_formats);
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.target_date()?;

        if self.input.as_deref().map_or(true, |input| input.trim().is_empty()) {
            return Err(ConfigValidationError::MissingInput);
        }

        self.resolved_input_format()?;
        self.resolved_output_format()?;

        if self.extra_formats.iter().any(|fmt| fmt.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyExtraFormat);
        }

        Ok(())
    }

    /// Parsed target date
    pub fn target_date(&self) -> Result<NaiveDate, ConfigValidationError> {
        let raw = self.target_date.as_deref().ok_or(ConfigValidationError::MissingTargetDate)?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| ConfigValidationError::InvalidTargetDate(raw.to_string()))
    }

    /// Input format, falling back to the input file extension
    pub fn resolved_input_format(&self) -> Result<InputFormat, ConfigValidationError> {
        match &self.input_format {
            Some(raw) => raw.parse().map_err(ConfigValidationError::InvalidInputFormat),
            None => Ok(self.input.as_deref().map(InputFormat::from_path).unwrap_or(InputFormat::Text)),
        }
    }

    /// Parsed output format
    pub fn resolved_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format.parse().map_err(ConfigValidationError::InvalidOutputFormat)
    }

    /// Build a checker with this configuration's parser settings
    pub fn build_checker(&self) -> CoverageChecker {
        CoverageChecker::new()
            .with_parser(TimestampParser::new().with_extra_formats(self.extra_formats.iter().cloned()))
            .with_parallel_threshold(self.parallel_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CheckerConfig {
        CheckerConfig {
            target_date: Some("2025-10-20".to_string()),
            input: Some("samples.txt".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = CheckerConfig::default();
        assert!(config.target_date.is_none());
        assert!(config.input.is_none());
        assert_eq!(config.output_format, "json");
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.extra_formats.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_date().unwrap(), NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
        assert_eq!(config.resolved_input_format().unwrap(), InputFormat::Text);
        assert_eq!(config.resolved_output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_missing_target_date() {
        let config = CheckerConfig { target_date: None, ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::MissingTargetDate)));
    }

    #[test]
    fn test_invalid_target_date() {
        let config = CheckerConfig { target_date: Some("2025-02-30".to_string()), ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidTargetDate(_))));
    }

    #[test]
    fn test_missing_input() {
        let config = CheckerConfig { input: Some("  ".to_string()), ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::MissingInput)));
    }

    #[test]
    fn test_invalid_formats() {
        let config = CheckerConfig { input_format: Some("xml".to_string()), ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidInputFormat(_))));

        let config = CheckerConfig { output_format: "yaml".to_string(), ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOutputFormat(_))));

        let config = CheckerConfig { extra_formats: vec![" ".to_string()], ..valid_config() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyExtraFormat)));
    }

    #[test]
    fn test_input_format_inferred_from_extension() {
        let config = CheckerConfig { input: Some("samples.json".to_string()), ..valid_config() };
        assert_eq!(config.resolved_input_format().unwrap(), InputFormat::Json);

        let config = CheckerConfig {
            input: Some("samples.json".to_string()),
            input_format: Some("text".to_string()),
            ..valid_config()
        };
        assert_eq!(config.resolved_input_format().unwrap(), InputFormat::Text);
    }

    #[test]
    fn test_build_checker() {
        let config = CheckerConfig {
            extra_formats: vec!["%d.%m.%Y %H:%M:%S".to_string()],
            parallel_threshold: 10,
            ..valid_config()
        };
        let checker = config.build_checker();

        assert_eq!(checker.parallel_threshold(), 10);
        assert_eq!(checker.parser().extra_formats(), &["%d.%m.%Y %H:%M:%S".to_string()]);
    }

    #[test]
    fn test_config_file_merges_with_defaults() {
        let config_file = ConfigFile {
            target_date: Some("2025-10-20".to_string()),
            output_format: Some("text".to_string()),
            ..Default::default()
        };
        let config = CheckerConfig::from_config_file(config_file);

        assert_eq!(config.target_date.as_deref(), Some("2025-10-20"));
        assert_eq!(config.output_format, "text");
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
