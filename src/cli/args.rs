//! Command-line argument definitions for the flight distance verifier
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_OUTPUT_SUFFIX;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the flight distance verifier
///
/// Reconciles a declared flight table against an airport reference table,
/// recomputes great-circle distances and writes the discrepancies.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-distance",
    version,
    about = "Verify declared flight routes and distances against an airport reference table",
    long_about = "Looks up every departure and arrival code of a declared flight table in an \
                  airport reference table, attaches the verified city/country labels and \
                  coordinates, and computes declared and verified great-circle distances in \
                  nautical miles. Rows whose verified coordinates are missing or malformed are \
                  dropped. The result is written as UTF-8 CSV with a byte-order mark."
)]
pub struct Args {
    /// Declared flight table (CSV)
    ///
    /// Must contain: Normalised City Pair, Departure Code, Arrival Code,
    /// Departure_lat, Departure_lon, Arrival_lat, Arrival_lon.
    #[arg(value_name = "FLIGHTS_CSV")]
    pub flights_path: PathBuf,

    /// Airport reference table (CSV)
    ///
    /// Must contain: iata_code, municipality, iso_country, coordinates
    /// (the latter as "<lon>, <lat>").
    #[arg(value_name = "AIRPORTS_CSV")]
    pub airports_path: PathBuf,

    /// Output path for the verified table
    ///
    /// Defaults to `<flights stem>_verified.csv` next to the flight table.
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/flight-distance/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Fixed label for airport codes missing from the reference table
    #[arg(
        long = "not-found-label",
        value_name = "TEXT",
        help = "Label used when an airport code is not found (default: \"<code>\" not found!)"
    )]
    pub not_found_label: Option<String>,

    /// Fail when the reference table repeats an airport code
    #[arg(
        long = "reject-duplicates",
        help = "Abort on duplicate airport codes instead of keeping the first row"
    )]
    pub reject_duplicates: bool,

    /// Print the first rows of the result to stdout
    #[arg(
        long = "preview",
        value_name = "ROWS",
        help = "Print the first ROWS verified flights"
    )]
    pub preview: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "report-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub report_format: OutputFormat,
}

/// Output format options for the run summary
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for input in [&self.flights_path, &self.airports_path] {
            if !input.exists() {
                return Err(Error::file_not_found(input.display().to_string()));
            }

            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        // Validate output file directory exists if specified
        if let Some(output_path) = &self.output_path {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }

            if output_path == &self.flights_path || output_path == &self.airports_path {
                return Err(Error::configuration(format!(
                    "Output path would overwrite an input file: {}",
                    output_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Output path, defaulting to `<flights stem>_verified.csv`
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => default_output_path(&self.flights_path),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Default output path next to the flight table
pub fn default_output_path(flights_path: &Path) -> PathBuf {
    let stem = flights_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "flights".to_string());

    flights_path.with_file_name(format!("{}{}.csv", stem, DEFAULT_OUTPUT_SUFFIX))
}
