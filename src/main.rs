// Day Coverage Checker - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/day-coverage-checker --date 2025-10-20 --input samples.txt
// ```
//
// Or with a configuration file and a text summary:
//
// ```console
// $ ./target/release/day-coverage-checker --config checker.json --output-format text --verbose
// ```

use anyhow::Context;
use clap::Parser;
use day_coverage_checker::coverage::{load_input, CoverageReport, InputItems, LoggingConfig};
use day_coverage_checker::types::{CheckerConfig, CliArgs, OutputFormat};
use std::process;
use tracing::{error, info};

/// Exit status when the check ran but the day is not fully covered
const EXIT_NOT_COVERED: i32 = 2;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match CheckerConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: warnings only
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let dry_run = args.dry_run;

    // Load configuration from CLI arguments and optional config file
    let config = match CheckerConfig::from_cli_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - check will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    match run_check(&config) {
        Ok(report) if report.is_match => {
            info!("Day fully covered");
        }
        Ok(_) => process::exit(EXIT_NOT_COVERED),
        Err(e) => {
            error!("Coverage check failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Load the input, run the check and print the report
fn run_check(config: &CheckerConfig) -> anyhow::Result<CoverageReport> {
    let target_date = config.target_date()?;
    let input_format = config.resolved_input_format()?;
    let output_format = config.resolved_output_format()?;
    let input_path = config.input.as_deref().context("No input file configured")?;

    let items = load_input(input_path, input_format)
        .with_context(|| format!("Failed to load input from {}", input_path))?;

    let checker = config.build_checker();
    let report = match &items {
        InputItems::Lines(lines) => checker.check_strings(lines, target_date),
        InputItems::Json(value) => checker
            .check_json(value, target_date)
            .with_context(|| format!("Invalid input in {}", input_path))?,
    };

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report),
    }

    Ok(report)
}

/// Print configuration summary
fn print_configuration_summary(config: &CheckerConfig) {
    eprintln!("Configuration:");
    eprintln!("  Target Date: {}", config.target_date.as_deref().unwrap_or("-"));
    eprintln!("  Input: {}", config.input.as_deref().unwrap_or("-"));
    if let Ok(format) = config.resolved_input_format() {
        eprintln!("  Input Format: {}", format);
    }
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Parallel Threshold: {}", config.parallel_threshold);
    for fmt in &config.extra_formats {
        eprintln!("  Extra Format: {}", fmt);
    }
}
