//! Verify command implementation
//!
//! Loads configuration and both input tables, runs every flight through the
//! verification pipeline, writes the verified table and reports the run.

use super::shared::{RunSummary, load_configuration};
use crate::app::services::airport_registry::AirportRegistry;
use crate::app::services::flight_table::load_flights;
use crate::app::services::record_processor::{ProcessingResult, RecordProcessor};
use crate::app::services::report_writer::{WriterConfig, render_preview, write_verified_table};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Verify command runner
///
/// 1. Validate arguments and load configuration
/// 2. Build the airport registry and read the flight table
/// 3. Verify every flight and compute distances
/// 4. Write the verified table and print the summary
pub fn run_verify(args: Args) -> Result<RunSummary> {
    info!("Starting flight distance verification");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let summary = verify_files(&args, &config)?;

    generate_final_report(&args, &summary)?;

    Ok(summary)
}

/// Run the pipeline for the files named in `args` under `config`
///
/// Nothing is written when every flight is dropped; the run fails with
/// `Error::EmptyResult` instead.
pub fn verify_files(args: &Args, config: &Config) -> Result<RunSummary> {
    let start_time = Instant::now();
    let output_path = args.get_output_path();

    let (registry, load_stats) =
        AirportRegistry::load_from_path(&args.airports_path, config.lookup.duplicate_codes)?;
    info!("{}", load_stats.summary());

    let flights = load_flights(
        &args.flights_path,
        config.input.strict_declared_coordinates,
    )?;

    let processor = RecordProcessor::new(&registry, config);
    let result = processor.process_flights(flights.records, args.show_progress());

    if result.stats.dropped_count() > 0 {
        warn!(
            "{} of {} flights dropped ({} airport not found, {} malformed coordinates)",
            result.stats.dropped_count(),
            result.stats.total_input,
            result.stats.not_found,
            result.stats.malformed_coordinates
        );
    }

    if result.is_empty() {
        return Err(Error::empty_result(flights.stats.rows_read));
    }

    if let Some(rows) = args.preview {
        print_preview(&result, rows);
    }

    let writer_config = WriterConfig {
        write_bom: config.output.write_bom,
    };
    let written = write_verified_table(&output_path, &result.records, &writer_config)?;

    Ok(RunSummary {
        reference_rows: load_stats.total_records,
        airports_indexed: registry.airport_count(),
        duplicate_codes: load_stats.duplicate_codes,
        flights_read: flights.stats.rows_read,
        invalid_declared: flights.stats.invalid_declared,
        not_found: result.stats.not_found,
        malformed_coordinates: result.stats.malformed_coordinates,
        flights_written: written.rows_written,
        max_difference_nm: result
            .max_difference()
            .map(|record| record.distance_difference_nm)
            .unwrap_or(0.0),
        mean_difference_nm: result.mean_difference_nm(),
        output_path,
        output_size_bytes: written.bytes_written,
        processing_time: start_time.elapsed(),
    })
}

fn print_preview(result: &ProcessingResult, rows: usize) {
    println!("\n{}", "Verified flights".bright_green().bold());
    print!("{}", render_preview(&result.records, rows));
}

/// Generate final report
fn generate_final_report(args: &Args, summary: &RunSummary) -> Result<()> {
    info!("Generating final report");

    match args.report_format {
        OutputFormat::Human => {
            if !args.quiet {
                generate_human_report(summary);
            }
            Ok(())
        }
        OutputFormat::Json => generate_json_report(summary),
        OutputFormat::Csv => generate_csv_report(summary),
    }
}

/// Generate human-readable report
fn generate_human_report(summary: &RunSummary) {
    let duration = HumanDuration(summary.processing_time);

    println!("\n{}", "Verification Complete".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  {} {} indexed from {} rows",
        "Airports:".bright_cyan(),
        summary.airports_indexed.to_string().bright_white().bold(),
        summary.reference_rows
    );
    if summary.duplicate_codes > 0 {
        println!(
            "  {} {} (first row kept)",
            "Duplicate codes:".bright_yellow(),
            summary.duplicate_codes
        );
    }
    println!(
        "  {} {} read, {} written",
        "Flights:".bright_cyan(),
        summary.flights_read,
        summary.flights_written.to_string().bright_white().bold()
    );

    if summary.flights_dropped() > 0 {
        println!(
            "  {} {} ({} invalid declared, {} not found, {} malformed)",
            "Dropped:".bright_yellow(),
            summary.flights_dropped(),
            summary.invalid_declared,
            summary.not_found,
            summary.malformed_coordinates
        );
    }

    println!(
        "  {} max {:.2} NM, mean {:.2} NM",
        "Discrepancy:".bright_cyan(),
        summary.max_difference_nm,
        summary.mean_difference_nm
    );
    println!(
        "  {} {} ({})",
        "Output:".bright_cyan(),
        summary.output_path.display(),
        RunSummary::format_size(summary.output_size_bytes)
    );
    println!("  {} {}", "Time elapsed:".bright_cyan(), duration);
    println!();
}

/// Generate JSON report for machine consumption
fn generate_json_report(summary: &RunSummary) -> Result<()> {
    let json_summary = serde_json::json!({
        "reference_rows": summary.reference_rows,
        "airports_indexed": summary.airports_indexed,
        "duplicate_codes": summary.duplicate_codes,
        "flights_read": summary.flights_read,
        "flights_written": summary.flights_written,
        "dropped": {
            "invalid_declared": summary.invalid_declared,
            "not_found": summary.not_found,
            "malformed_coordinates": summary.malformed_coordinates,
        },
        "max_difference_nm": summary.max_difference_nm,
        "mean_difference_nm": summary.mean_difference_nm,
        "output_path": summary.output_path.display().to_string(),
        "output_size_bytes": summary.output_size_bytes,
        "processing_time_seconds": summary.processing_time.as_secs_f64(),
    });

    let rendered = serde_json::to_string_pretty(&json_summary)
        .map_err(|e| Error::report(format!("Failed to render JSON summary: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(summary: &RunSummary) -> Result<()> {
    println!("metric,value");
    println!("reference_rows,{}", summary.reference_rows);
    println!("airports_indexed,{}", summary.airports_indexed);
    println!("duplicate_codes,{}", summary.duplicate_codes);
    println!("flights_read,{}", summary.flights_read);
    println!("flights_written,{}", summary.flights_written);
    println!("invalid_declared,{}", summary.invalid_declared);
    println!("not_found,{}", summary.not_found);
    println!("malformed_coordinates,{}", summary.malformed_coordinates);
    println!("max_difference_nm,{}", summary.max_difference_nm);
    println!("mean_difference_nm,{}", summary.mean_difference_nm);
    println!("output_size_bytes,{}", summary.output_size_bytes);
    println!(
        "processing_time_seconds,{}",
        summary.processing_time.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
        let flights = dir.join("flights.csv");
        let airports = dir.join("airports.csv");
        std::fs::write(
            &flights,
            "Normalised City Pair,Departure Code,Arrival Code,Departure_lat,Departure_lon,Arrival_lat,Arrival_lon\n\
             London - New York,LHR,JFK,51.47,-0.45,40.64,-73.78\n\
             London - Nowhere,LHR,ZZZ,51.47,-0.45,10.0,10.0\n",
        )
        .unwrap();
        std::fs::write(
            &airports,
            "iata_code,municipality,iso_country,coordinates\n\
             LHR,London,GB,\"-0.461941, 51.4706\"\n\
             JFK,New York,US,\"-73.7781, 40.6413\"\n",
        )
        .unwrap();
        (flights, airports)
    }

    fn args_for(flights: PathBuf, airports: PathBuf) -> Args {
        Args {
            flights_path: flights,
            airports_path: airports,
            output_path: None,
            config_file: None,
            not_found_label: None,
            reject_duplicates: false,
            preview: None,
            verbose: 0,
            quiet: true,
            report_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_verify_files_summary() {
        let temp_dir = TempDir::new().unwrap();
        let (flights, airports) = write_inputs(temp_dir.path());
        let args = args_for(flights, airports);

        let summary = verify_files(&args, &Config::default()).unwrap();

        assert_eq!(summary.airports_indexed, 2);
        assert_eq!(summary.flights_read, 2);
        assert_eq!(summary.flights_written, 1);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.flights_dropped(), 1);
        assert!(summary.max_difference_nm < 5.0);
        assert_eq!(summary.output_path, temp_dir.path().join("flights_verified.csv"));
        assert!(summary.output_path.exists());
        assert!(summary.output_size_bytes > 0);
    }

    #[test]
    fn test_run_verify_reports() {
        let temp_dir = TempDir::new().unwrap();
        let (flights, airports) = write_inputs(temp_dir.path());

        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Csv] {
            let mut args = args_for(flights.clone(), airports.clone());
            args.report_format = format;
            args.preview = Some(1);
            args.config_file = Some(temp_dir.path().join("config.toml"));
            std::fs::write(temp_dir.path().join("config.toml"), "").unwrap();

            let summary = run_verify(args).unwrap();
            assert_eq!(summary.flights_written, 1);
        }
    }

    #[test]
    fn test_verify_files_missing_reference() {
        let temp_dir = TempDir::new().unwrap();
        let (flights, _) = write_inputs(temp_dir.path());
        let args = args_for(flights, temp_dir.path().join("missing.csv"));

        let err = verify_files(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert!(!args.get_output_path().exists());
    }
}
