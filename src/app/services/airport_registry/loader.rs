//! Airport reference table loading
//!
//! Reads the reference CSV (`iata_code, municipality, iso_country,
//! coordinates`, extra columns ignored) and builds the registry from it.

use super::AirportRegistry;
use super::metadata::LoadStats;
use crate::app::models::AirportRecord;
use crate::app::services::column_mapping::{open_csv_reader, read_column_mapping};
use crate::config::DuplicateCodePolicy;
use crate::constants::airport_columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use tracing::info;

impl AirportRegistry {
    /// Load the airport registry from a reference CSV file
    ///
    /// # Arguments
    /// * `path` - Path to the airport reference table
    /// * `policy` - How repeated airport codes are handled
    ///
    /// # Returns
    /// * `Result<(AirportRegistry, LoadStats)>` - Registry and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the file doesn't exist
    /// * Returns `Error::MissingColumn` if a required column is absent
    /// * Returns `Error::CsvParsing` for malformed CSV
    /// * Returns `Error::DuplicateAirportCode` under [`DuplicateCodePolicy::Reject`]
    pub fn load_from_path(path: &Path, policy: DuplicateCodePolicy) -> Result<(Self, LoadStats)> {
        info!("Loading airport reference table: {}", path.display());

        let records = read_airport_records(path)?;
        Self::build(records, policy)
    }
}

/// Read every row of the reference table into `AirportRecord`s
pub fn read_airport_records(path: &Path) -> Result<Vec<AirportRecord>> {
    let mut reader = open_csv_reader(path)?;
    let mapping = read_column_mapping(&mut reader, path, airport_columns::REQUIRED)?;

    let mut airports = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "Failed to read CSV record".to_string(),
            Some(e),
        )
    })? {
        airports.push(AirportRecord::new(
            mapping.field(&record, airport_columns::IATA_CODE),
            mapping.field(&record, airport_columns::MUNICIPALITY),
            mapping.field(&record, airport_columns::ISO_COUNTRY),
            mapping.field(&record, airport_columns::COORDINATES),
        ));
    }

    Ok(airports)
}
