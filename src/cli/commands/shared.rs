//! Shared components for CLI commands
//!
//! This module contains the run summary type, logging setup and the layered
//! configuration loading used by the verify command.

use crate::cli::args::Args;
use crate::config::{Config, DuplicateCodePolicy};
use crate::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Statistics for one verification run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Rows read from the reference table
    pub reference_rows: usize,
    /// Airports placed in the index
    pub airports_indexed: usize,
    /// Reference rows skipped as duplicate codes
    pub duplicate_codes: usize,
    /// Data rows read from the flight table
    pub flights_read: usize,
    /// Flight rows dropped for non-numeric declared coordinates
    pub invalid_declared: usize,
    /// Flight rows dropped because an airport code was not found
    pub not_found: usize,
    /// Flight rows dropped because reference coordinates were malformed
    pub malformed_coordinates: usize,
    /// Rows written to the verified table
    pub flights_written: usize,
    /// Largest declared vs verified discrepancy
    pub max_difference_nm: f64,
    /// Mean declared vs verified discrepancy
    pub mean_difference_nm: f64,
    /// Where the verified table was written
    pub output_path: PathBuf,
    /// Verified table size in bytes
    pub output_size_bytes: u64,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunSummary {
    /// Flight rows that did not reach the output
    pub fn flights_dropped(&self) -> usize {
        self.invalid_declared + self.not_found + self.malformed_coordinates
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flight_distance={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(label) = &args.not_found_label {
        config.lookup.not_found_label = Some(label.clone());
    }

    if args.reject_duplicates {
        config.lookup.duplicate_codes = DuplicateCodePolicy::Reject;
    }
}
