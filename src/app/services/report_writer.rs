//! Verified table output
//!
//! Writes verified flights as CSV in the fixed output column order, UTF-8
//! with a leading byte-order mark by default. Values are written unrounded.

use crate::app::models::EnrichedFlightRecord;
use crate::constants::{UTF8_BOM, output_columns};
use crate::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Output settings for the verified table
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Prefix the file with a UTF-8 byte-order mark
    pub write_bom: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { write_bom: true }
    }
}

/// Outcome of writing the verified table
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    pub rows_written: usize,
    pub bytes_written: u64,
}

/// Absolute discrepancy between declared and verified distance
pub fn distance_difference_nm(declared_nm: f64, verified_nm: f64) -> f64 {
    (declared_nm - verified_nm).abs()
}

/// One output row; field order is the output column order
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "Normalised City Pair")]
    city_pair: &'a str,
    #[serde(rename = "Departure Code")]
    departure_code: &'a str,
    #[serde(rename = "Arrival Code")]
    arrival_code: &'a str,
    #[serde(rename = "Departure_lat")]
    departure_lat: f64,
    #[serde(rename = "Departure_lon")]
    departure_lon: f64,
    #[serde(rename = "Arrival_lat")]
    arrival_lat: f64,
    #[serde(rename = "Arrival_lon")]
    arrival_lon: f64,
    #[serde(rename = "Verified City Pair")]
    verified_city_pair: &'a str,
    #[serde(rename = "Verified_dep_lat")]
    verified_dep_lat: f64,
    #[serde(rename = "Verified_dep_lon")]
    verified_dep_lon: f64,
    #[serde(rename = "Verified_arr_lat")]
    verified_arr_lat: f64,
    #[serde(rename = "Verified_arr_lon")]
    verified_arr_lon: f64,
    #[serde(rename = "Declared_Distance_NM")]
    declared_distance_nm: f64,
    #[serde(rename = "Verified_Distance_NM")]
    verified_distance_nm: f64,
    #[serde(rename = "Distance_difference")]
    distance_difference: f64,
}

impl<'a> From<&'a EnrichedFlightRecord> for OutputRow<'a> {
    fn from(record: &'a EnrichedFlightRecord) -> Self {
        let flight = &record.flight;
        Self {
            city_pair: &flight.normalized_city_pair,
            departure_code: &flight.departure_code,
            arrival_code: &flight.arrival_code,
            departure_lat: flight.declared_departure.latitude,
            departure_lon: flight.declared_departure.longitude,
            arrival_lat: flight.declared_arrival.latitude,
            arrival_lon: flight.declared_arrival.longitude,
            verified_city_pair: &record.verified_city_pair,
            verified_dep_lat: record.verified_departure.latitude,
            verified_dep_lon: record.verified_departure.longitude,
            verified_arr_lat: record.verified_arrival.latitude,
            verified_arr_lon: record.verified_arrival.longitude,
            declared_distance_nm: record.declared_distance_nm,
            verified_distance_nm: record.verified_distance_nm,
            distance_difference: record.distance_difference_nm,
        }
    }
}

/// Write verified records to any writer
///
/// The header row is always written, even for an empty slice.
pub fn write_records<W: Write>(
    writer: W,
    records: &[EnrichedFlightRecord],
    config: &WriterConfig,
) -> Result<usize> {
    let mut writer = writer;
    if config.write_bom {
        writer
            .write_all(UTF8_BOM)
            .map_err(|e| Error::io("Failed to write byte-order mark", e))?;
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(output_columns::ALL)
        .map_err(|e| Error::csv_parsing("output", "Failed to write header", Some(e)))?;

    for record in records {
        csv_writer
            .serialize(OutputRow::from(record))
            .map_err(|e| {
                Error::csv_parsing(
                    "output",
                    format!("Failed to write row {}", record.flight.row_number),
                    Some(e),
                )
            })?;
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush output", e))?;

    Ok(records.len())
}

/// Write the verified table to a file
pub fn write_verified_table(
    path: &Path,
    records: &[EnrichedFlightRecord],
    config: &WriterConfig,
) -> Result<WriteSummary> {
    debug!("Writing {} rows to {}", records.len(), path.display());

    let file = File::create(path).map_err(|e| {
        Error::io(
            format!("Failed to create output file '{}'", path.display()),
            e,
        )
    })?;

    let rows_written = write_records(BufWriter::new(file), records, config).map_err(|e| match e {
        Error::CsvParsing {
            message, source, ..
        } => Error::csv_parsing(path.display().to_string(), message, source),
        other => other,
    })?;

    let bytes_written = std::fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| Error::io(format!("Failed to stat '{}'", path.display()), e))?;

    info!(
        "Wrote {} verified flights to {} ({} bytes)",
        rows_written,
        path.display(),
        bytes_written
    );

    Ok(WriteSummary {
        rows_written,
        bytes_written,
    })
}

/// Render the first `limit` records as an aligned text table
pub fn render_preview(records: &[EnrichedFlightRecord], limit: usize) -> String {
    let mut out = format!(
        "{:<5} {:<4} {:<4} {:<44} {:>12} {:>12} {:>10}\n",
        "Row", "Dep", "Arr", "Verified City Pair", "Declared NM", "Verified NM", "Diff NM"
    );

    for record in records.iter().take(limit) {
        out.push_str(&format!(
            "{:<5} {:<4} {:<4} {:<44} {:>12.2} {:>12.2} {:>10.2}\n",
            record.flight.row_number,
            record.flight.departure_code,
            record.flight.arrival_code,
            truncate(&record.verified_city_pair, 44),
            record.declared_distance_nm,
            record.verified_distance_nm,
            record.distance_difference_nm
        ));
    }

    if records.len() > limit {
        out.push_str(&format!("... {} more rows\n", records.len() - limit));
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(width.saturating_sub(3)).collect();
        short.push_str("...");
        short
    }
}
