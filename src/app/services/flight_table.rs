//! Flight table loading
//!
//! Reads the declared flight table, resolving the required columns by header
//! name, and parses the declared coordinates. Rows keep their input order.

use crate::app::models::{Coordinates, FlightRecord};
use crate::app::services::column_mapping::{ColumnMapping, open_csv_reader, read_column_mapping};
use crate::constants::flight_columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use tracing::{info, warn};

/// Statistics for reading the flight table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLoadStats {
    /// Data rows read from the file
    pub rows_read: usize,

    /// Rows dropped because a declared coordinate was not a finite number
    pub invalid_declared: usize,
}

impl FlightLoadStats {
    /// Rows handed on to verification
    pub fn rows_loaded(&self) -> usize {
        self.rows_read - self.invalid_declared
    }
}

/// Flight records read from one file
#[derive(Debug, Clone)]
pub struct FlightTable {
    pub records: Vec<FlightRecord>,
    pub stats: FlightLoadStats,
}

/// Load the flight table
///
/// A declared coordinate that is not a finite number drops its row with a
/// warning; with `strict` it aborts the load instead.
///
/// # Errors
/// * Returns `Error::FileNotFound` if the file doesn't exist
/// * Returns `Error::MissingColumn` if a required column is absent
/// * Returns `Error::CsvParsing` for malformed CSV
/// * Returns `Error::InvalidDeclaredCoordinate` in strict mode
pub fn load_flights(path: &Path, strict: bool) -> Result<FlightTable> {
    info!("Loading flight table: {}", path.display());

    let mut reader = open_csv_reader(path)?;
    let mapping = read_column_mapping(&mut reader, path, flight_columns::REQUIRED)?;

    let mut records = Vec::new();
    let mut stats = FlightLoadStats::default();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "Failed to read CSV record".to_string(),
            Some(e),
        )
    })? {
        stats.rows_read += 1;
        let row_number = stats.rows_read;

        match parse_flight_record(&mapping, &record, row_number) {
            Ok(flight) => records.push(flight),
            Err((column, value)) => {
                if strict {
                    return Err(Error::invalid_declared_coordinate(
                        path.display().to_string(),
                        row_number,
                        column,
                        value,
                    ));
                }
                warn!(
                    "Dropping flight row {}: declared {} '{}' is not a number",
                    row_number, column, value
                );
                stats.invalid_declared += 1;
            }
        }
    }

    info!(
        "Loaded {} flight rows ({} dropped for invalid declared coordinates)",
        stats.rows_loaded(),
        stats.invalid_declared
    );

    Ok(FlightTable { records, stats })
}

/// Build a `FlightRecord` from one CSV row
///
/// On failure returns the offending column name and its raw value.
fn parse_flight_record(
    mapping: &ColumnMapping,
    record: &StringRecord,
    row_number: usize,
) -> std::result::Result<FlightRecord, (&'static str, String)> {
    let declared = |column: &'static str| -> std::result::Result<f64, (&'static str, String)> {
        let raw = mapping.field(record, column);
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| (column, raw.to_string()))
    };

    let departure_lat = declared(flight_columns::DEPARTURE_LAT)?;
    let departure_lon = declared(flight_columns::DEPARTURE_LON)?;
    let arrival_lat = declared(flight_columns::ARRIVAL_LAT)?;
    let arrival_lon = declared(flight_columns::ARRIVAL_LON)?;

    Ok(FlightRecord {
        row_number,
        normalized_city_pair: mapping.field(record, flight_columns::CITY_PAIR).to_string(),
        departure_code: mapping
            .field(record, flight_columns::DEPARTURE_CODE)
            .to_string(),
        arrival_code: mapping.field(record, flight_columns::ARRIVAL_CODE).to_string(),
        declared_departure: Coordinates::new(departure_lon, departure_lat),
        declared_arrival: Coordinates::new(arrival_lon, arrival_lat),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str =
        "Normalised City Pair,Departure Code,Arrival Code,Departure_lat,Departure_lon,Arrival_lat,Arrival_lon";

    fn write_flights(dir: &Path, rows: &[&str]) -> std::path::PathBuf {
        let path = dir.join("flights.csv");
        let mut content = format!("{}\n", HEADER);
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_flights_preserves_order_and_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_flights(
            temp_dir.path(),
            &[
                "London - New York,LHR,JFK,51.47,-0.45,40.64,-73.78",
                "Paris - Sydney,CDG,SYD,49.01,2.55,-33.95,151.18",
            ],
        );

        let table = load_flights(&path, false).unwrap();
        assert_eq!(table.records.len(), 2);
        assert_eq!(table.stats.rows_read, 2);
        assert_eq!(table.stats.invalid_declared, 0);

        let first = &table.records[0];
        assert_eq!(first.row_number, 1);
        assert_eq!(first.normalized_city_pair, "London - New York");
        assert_eq!(first.departure_code, "LHR");
        assert_eq!(first.arrival_code, "JFK");
        assert_eq!(first.declared_departure, Coordinates::new(-0.45, 51.47));
        assert_eq!(first.declared_arrival, Coordinates::new(-73.78, 40.64));

        assert_eq!(table.records[1].row_number, 2);
        assert_eq!(table.records[1].departure_code, "CDG");
    }

    #[test]
    fn test_invalid_declared_coordinate_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_flights(
            temp_dir.path(),
            &[
                "A - B,AAA,BBB,n/a,-0.45,40.64,-73.78",
                "London - New York,LHR,JFK,51.47,-0.45,40.64,-73.78",
            ],
        );

        let table = load_flights(&path, false).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].row_number, 2);
        assert_eq!(table.stats.invalid_declared, 1);
        assert_eq!(table.stats.rows_loaded(), 1);
    }

    #[test]
    fn test_invalid_declared_coordinate_strict() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_flights(temp_dir.path(), &["A - B,AAA,BBB,51.47,-0.45,40.64,inf"]);

        let err = load_flights(&path, true).unwrap_err();
        match err {
            Error::InvalidDeclaredCoordinate {
                row, column, value, ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Arrival_lon");
                assert_eq!(value, "inf");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flights.csv");
        std::fs::write(
            &path,
            "Normalised City Pair,Departure Code,Arrival Code,Departure_lat,Departure_lon,Arrival_lat\n",
        )
        .unwrap();

        let err = load_flights(&path, false).unwrap_err();
        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "Arrival_lon"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_columns_and_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flights.csv");
        std::fs::write(
            &path,
            format!(
                "\u{feff}Flight No,{}\nBA117,London - New York,LHR,JFK,51.47,-0.45,40.64,-73.78\n",
                HEADER
            ),
        )
        .unwrap();

        let table = load_flights(&path, false).unwrap();
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].normalized_city_pair, "London - New York");
    }
}
