//! Application constants for the flight distance verifier
//!
//! This module contains column names, default values and helper functions
//! used throughout the verification pipeline.

// =============================================================================
// Geodesy
// =============================================================================

/// Spherical Earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.0;

// =============================================================================
// Encoding
// =============================================================================

/// UTF-8 byte-order mark written at the start of the output file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Byte-order mark as it appears after decoding to `str`
pub const BOM_CHAR: char = '\u{feff}';

// =============================================================================
// Defaults
// =============================================================================

/// Suffix appended to the flight table file stem for the default output path
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_verified";

/// Configuration directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "flight-distance";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the not-found label
pub const ENV_NOT_FOUND_LABEL: &str = "FLIGHT_DISTANCE_NOT_FOUND_LABEL";

/// Environment variable overriding the duplicate code policy
pub const ENV_DUPLICATE_CODES: &str = "FLIGHT_DISTANCE_DUPLICATE_CODES";

/// Environment variable overriding the Earth radius
pub const ENV_EARTH_RADIUS_NM: &str = "FLIGHT_DISTANCE_EARTH_RADIUS_NM";

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names of the flight table
pub mod flight_columns {
    pub const CITY_PAIR: &str = "Normalised City Pair";
    pub const DEPARTURE_CODE: &str = "Departure Code";
    pub const ARRIVAL_CODE: &str = "Arrival Code";
    pub const DEPARTURE_LAT: &str = "Departure_lat";
    pub const DEPARTURE_LON: &str = "Departure_lon";
    pub const ARRIVAL_LAT: &str = "Arrival_lat";
    pub const ARRIVAL_LON: &str = "Arrival_lon";

    /// Columns that must be present in every flight table
    pub const REQUIRED: &[&str] = &[
        CITY_PAIR,
        DEPARTURE_CODE,
        ARRIVAL_CODE,
        DEPARTURE_LAT,
        DEPARTURE_LON,
        ARRIVAL_LAT,
        ARRIVAL_LON,
    ];
}

/// Column names of the airport reference table
pub mod airport_columns {
    pub const IATA_CODE: &str = "iata_code";
    pub const MUNICIPALITY: &str = "municipality";
    pub const ISO_COUNTRY: &str = "iso_country";
    pub const COORDINATES: &str = "coordinates";

    /// Columns that must be present in every reference table
    pub const REQUIRED: &[&str] = &[IATA_CODE, MUNICIPALITY, ISO_COUNTRY, COORDINATES];
}

/// Column names of the verified output table, in output order
pub mod output_columns {
    pub use super::flight_columns::{
        ARRIVAL_CODE, ARRIVAL_LAT, ARRIVAL_LON, CITY_PAIR, DEPARTURE_CODE, DEPARTURE_LAT,
        DEPARTURE_LON,
    };

    pub const VERIFIED_CITY_PAIR: &str = "Verified City Pair";
    pub const VERIFIED_DEP_LAT: &str = "Verified_dep_lat";
    pub const VERIFIED_DEP_LON: &str = "Verified_dep_lon";
    pub const VERIFIED_ARR_LAT: &str = "Verified_arr_lat";
    pub const VERIFIED_ARR_LON: &str = "Verified_arr_lon";
    pub const DECLARED_DISTANCE_NM: &str = "Declared_Distance_NM";
    pub const VERIFIED_DISTANCE_NM: &str = "Verified_Distance_NM";
    pub const DISTANCE_DIFFERENCE: &str = "Distance_difference";

    /// Full output header
    pub const ALL: &[&str] = &[
        CITY_PAIR,
        DEPARTURE_CODE,
        ARRIVAL_CODE,
        DEPARTURE_LAT,
        DEPARTURE_LON,
        ARRIVAL_LAT,
        ARRIVAL_LON,
        VERIFIED_CITY_PAIR,
        VERIFIED_DEP_LAT,
        VERIFIED_DEP_LON,
        VERIFIED_ARR_LAT,
        VERIFIED_ARR_LON,
        DECLARED_DISTANCE_NM,
        VERIFIED_DISTANCE_NM,
        DISTANCE_DIFFERENCE,
    ];
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Label used for an airport code missing from the reference table
///
/// Matches the lookup convention of quoting the code: `"XYZ" not found!`
pub fn default_not_found_label(code: &str) -> String {
    format!("\"{}\" not found!", code)
}

/// Strip a leading byte-order mark and surrounding whitespace from a header cell
pub fn normalize_header(header: &str) -> &str {
    header.trim_start_matches(BOM_CHAR).trim()
}
