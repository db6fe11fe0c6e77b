//! Shared test utilities and fixtures for airport registry tests

use crate::app::models::AirportRecord;
use std::fs;
use std::path::{Path, PathBuf};


/// Reference rows for a few real airports
pub fn sample_airports() -> Vec<AirportRecord> {
    vec![
        AirportRecord::new("LHR", "London", "GB", "-0.461941, 51.4706"),
        AirportRecord::new("JFK", "New York", "US", "-73.7781, 40.6413"),
        AirportRecord::new("CDG", "Paris", "FR", "2.55, 49.012798"),
        AirportRecord::new("SYD", "Sydney", "AU", "151.177002, -33.946098"),
    ]
}

/// Write a reference CSV file with the given body lines under the standard header
pub fn write_reference_csv(dir: &Path, filename: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(filename);
    let mut content = String::from("ident,iata_code,municipality,iso_country,coordinates\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
